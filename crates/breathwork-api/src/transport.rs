// Shared transport configuration and response handling.
//
// Delivery, Preview and Management clients share timeout and user-agent
// settings plus the vendor error envelope, so both live here.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Error;

const RATE_LIMIT_RESET_HEADER: &str = "x-contentful-ratelimit-reset";

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("breathwork/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` with additional default headers.
    fn build_client_with_headers(&self, headers: HeaderMap) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Client(format!("failed to build HTTP client: {e}")))
    }

    /// Build a client that sends `Authorization: Bearer <token>` on every request.
    pub fn build_bearer_client(&self, token: &SecretString) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid access token header value: {e}"),
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        self.build_client_with_headers(headers)
    }
}

// ── Error envelope ───────────────────────────────────────────────────

/// Error body returned by every CMS endpoint:
/// `{ "sys": { "type": "Error", "id": "NotFound" }, "message": "...", "requestId": "..." }`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    #[serde(default)]
    sys: Option<ErrorSys>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    request_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorSys {
    #[serde(default)]
    id: Option<String>,
}

// ── Response handling ────────────────────────────────────────────────

/// Deserialize a successful JSON body or translate the error envelope.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = resp
            .headers()
            .get(RATE_LIMIT_RESET_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(1);
        return Error::RateLimited { retry_after_secs };
    }

    let raw = resp.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<ErrorResponse>(&raw).ok();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Error::Authentication {
            message: parsed
                .and_then(|e| e.message)
                .unwrap_or_else(|| "access token rejected".into()),
        };
    }

    match parsed {
        Some(err) => Error::Api {
            status: status.as_u16(),
            message: err.message.unwrap_or_else(|| status.to_string()),
            code: err.sys.and_then(|s| s.id),
            request_id: err.request_id,
        },
        None => Error::Api {
            status: status.as_u16(),
            message: if raw.is_empty() { status.to_string() } else { raw },
            code: None,
            request_id: None,
        },
    }
}
