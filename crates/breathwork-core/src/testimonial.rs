// ── Testimonial submission ──
//
// Visitors submit testimonials from the site; each one becomes an
// unapproved draft entry that an editor reviews and publishes in the CMS.

use num_traits::ToPrimitive;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use breathwork_api::{LocalizedFields, ManagementClient, TransportConfig};

use crate::config::CmsConfig;
use crate::convert::truthy;
use crate::error::CoreError;
use crate::model::ContentType;

/// A testimonial as posted by a visitor. Every field is optional and
/// untyped on the wire; [`TestimonialService::submit`] decides what is
/// acceptable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestimonialSubmission {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub role: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    /// Number or numeric string, as browsers send either.
    #[serde(default)]
    pub rating: Option<Value>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid rating")]
    InvalidRating,

    #[error("Testimonial submission is not configured (management token or space id missing)")]
    NotConfigured,

    #[error("Failed to submit testimonial: {0}")]
    Upstream(#[from] CoreError),
}

/// Integer value of a submitted rating.
///
/// Integers pass through, floats are truncated toward zero (`None` when out
/// of `i64` range) and strings contribute their leading integer digits
/// (`"4 stars"` is 4). Anything else is `None`.
pub fn parse_rating(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(|f| f.to_i64())),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

fn present(field: Option<&Value>) -> Option<&Value> {
    field.filter(|v| truthy(v))
}

/// Write side of the content layer.
#[derive(Debug, Clone)]
pub struct TestimonialService {
    client: Option<ManagementClient>,
    locale: String,
}

impl TestimonialService {
    /// `client` is `None` when no management credentials are configured;
    /// every submission is then rejected with [`SubmitError::NotConfigured`].
    pub fn new(client: Option<ManagementClient>, locale: impl Into<String>) -> Self {
        Self {
            client,
            locale: locale.into(),
        }
    }

    pub fn from_config(config: &CmsConfig) -> Result<Self, CoreError> {
        let client = match config.management_credentials() {
            Some(token) => {
                let transport = TransportConfig {
                    timeout: config.timeout,
                    ..TransportConfig::default()
                };
                Some(ManagementClient::new(
                    &config.management_host,
                    &config.space_id,
                    &config.environment,
                    token,
                    &transport,
                )?)
            }
            None => None,
        };
        Ok(Self::new(client, config.locale.clone()))
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Validate `submission` and store it as a draft. Returns the new entry id.
    pub async fn submit(&self, submission: &TestimonialSubmission) -> Result<String, SubmitError> {
        let name = present(submission.name.as_ref());
        let message = present(submission.message.as_ref());
        let rating = present(submission.rating.as_ref());
        let (Some(name), Some(message), Some(rating)) = (name, message, rating) else {
            return Err(SubmitError::MissingFields);
        };
        let rating = parse_rating(rating).ok_or(SubmitError::InvalidRating)?;

        let Some(client) = &self.client else {
            error!("testimonial submitted but management credentials are not configured");
            return Err(SubmitError::NotConfigured);
        };

        let role = present(submission.role.as_ref())
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));

        let fields = LocalizedFields::new(&self.locale)
            .set("name", name.clone())
            .set("role", role)
            .set("message", message.clone())
            .set("rating", rating)
            .set("approved", false);

        match client
            .create_entry(ContentType::Testimonial.as_ref(), &fields)
            .await
        {
            Ok(entry) => {
                info!(id = %entry.sys.id, "testimonial draft created");
                Ok(entry.sys.id)
            }
            Err(err) => {
                let err = CoreError::from(err);
                error!(error = %err, "error submitting testimonial");
                Err(SubmitError::Upstream(err))
            }
        }
    }
}
