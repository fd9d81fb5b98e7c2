// Management API HTTP client
//
// Write access is limited to creating draft entries. Publishing stays a
// manual step in the CMS web interface.

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use secrecy::SecretString;
use tracing::debug;
use url::Url;

use super::models::LocalizedFields;
use crate::delivery::client::environment_url;
use crate::delivery::models::Entry;
use crate::error::Error;
use crate::transport::{TransportConfig, handle_response};

const MANAGEMENT_MEDIA_TYPE: &str = "application/vnd.contentful.management.v1+json";
const CONTENT_TYPE_HEADER: &str = "X-Contentful-Content-Type";

/// Async client for the Management API of a single space environment.
#[derive(Debug, Clone)]
pub struct ManagementClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ManagementClient {
    /// Build a client for `host` (e.g. `https://api.contentful.com`)
    /// authenticated with a management token.
    pub fn new(
        host: &str,
        space: &str,
        environment: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_bearer_client(token)?;
        Self::from_reqwest(host, space, environment, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(
        host: &str,
        space: &str,
        environment: &str,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        let base_url = environment_url(host, space, environment)?;
        Ok(Self { http, base_url })
    }

    /// Create a new entry of `content_type`. The entry is left unpublished.
    ///
    /// `POST .../entries` with `X-Contentful-Content-Type: {content_type}`
    pub async fn create_entry(
        &self,
        content_type: &str,
        fields: &LocalizedFields,
    ) -> Result<Entry, Error> {
        let url = self.base_url.join("entries")?;
        debug!(content_type, "POST {url}");

        let content_type_value = HeaderValue::from_str(content_type).map_err(|e| Error::Client(
            format!("invalid content type id {content_type:?}: {e}"),
        ))?;
        let body = serde_json::to_vec(fields).map_err(|e| Error::Deserialization {
            message: format!("failed to encode entry: {e}"),
            body: String::new(),
        })?;

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, MANAGEMENT_MEDIA_TYPE)
            .header(CONTENT_TYPE_HEADER, content_type_value)
            .body(body)
            .send()
            .await?;

        let entry: Entry = handle_response(resp).await?;
        debug!(id = %entry.sys.id, "draft entry created");
        Ok(entry)
    }
}
