// ── Runtime CMS configuration ──
//
// Describes *where* content comes from and which credentials to use.
// Never touches disk: `breathwork-config` builds a `CmsConfig` and hands it in.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_ENVIRONMENT: &str = "master";
pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_DELIVERY_HOST: &str = "https://cdn.contentful.com";
pub const DEFAULT_PREVIEW_HOST: &str = "https://preview.contentful.com";
pub const DEFAULT_MANAGEMENT_HOST: &str = "https://api.contentful.com";

/// Connection settings for one CMS space environment.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Space identifier. May be empty: reads then fail soft at request time.
    pub space_id: String,
    /// Environment within the space (defaults to "master").
    pub environment: String,
    /// Locale used for Management API writes.
    pub locale: String,
    /// Token for the published-content (Delivery) API.
    pub delivery_token: SecretString,
    /// Token for the draft-content (Preview) API.
    pub preview_token: SecretString,
    /// Token for the Management API. Testimonial submission is disabled without it.
    pub management_token: Option<SecretString>,
    /// API roots, e.g. `https://cdn.contentful.com`.
    pub delivery_host: String,
    pub preview_host: String,
    pub management_host: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CmsConfig {
    /// Management token, if one is configured and non-empty.
    pub fn management_credentials(&self) -> Option<&SecretString> {
        if self.space_id.is_empty() {
            return None;
        }
        self.management_token
            .as_ref()
            .filter(|token| !token.expose_secret().is_empty())
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            space_id: String::new(),
            environment: DEFAULT_ENVIRONMENT.into(),
            locale: DEFAULT_LOCALE.into(),
            delivery_token: SecretString::from(String::new()),
            preview_token: SecretString::from(String::new()),
            management_token: None,
            delivery_host: DEFAULT_DELIVERY_HOST.into(),
            preview_host: DEFAULT_PREVIEW_HOST.into(),
            management_host: DEFAULT_MANAGEMENT_HOST.into(),
            timeout: Duration::from_secs(30),
        }
    }
}
