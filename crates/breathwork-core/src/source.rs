// ── Content source selection ──
//
// Published and draft content come from two endpoints with separate tokens.
// Both clients are built once at start-up and shared read-only.

use std::fmt;

use breathwork_api::{DeliveryClient, TransportConfig};
use serde::{Deserialize, Serialize};

use crate::config::CmsConfig;
use crate::error::CoreError;

/// Which data source a read goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Published content from the Delivery API.
    #[default]
    Published,
    /// Draft and published content from the Preview API.
    Preview,
}

impl ContentSource {
    /// Map the boolean "preview" flag used by callers.
    pub fn from_preview(preview: bool) -> Self {
        if preview { Self::Preview } else { Self::Published }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Published => f.write_str("published"),
            Self::Preview => f.write_str("preview"),
        }
    }
}

/// The two read clients, one per [`ContentSource`].
#[derive(Debug, Clone)]
pub struct ContentClients {
    published: DeliveryClient,
    preview: DeliveryClient,
}

impl ContentClients {
    pub fn new(published: DeliveryClient, preview: DeliveryClient) -> Self {
        Self { published, preview }
    }

    /// Build both clients from configuration.
    pub fn from_config(config: &CmsConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
            ..TransportConfig::default()
        };
        let published = DeliveryClient::new(
            &config.delivery_host,
            &config.space_id,
            &config.environment,
            &config.delivery_token,
            &transport,
        )?;
        let preview = DeliveryClient::new(
            &config.preview_host,
            &config.space_id,
            &config.environment,
            &config.preview_token,
            &transport,
        )?;
        Ok(Self { published, preview })
    }

    /// The client serving `source`.
    pub fn select(&self, source: ContentSource) -> &DeliveryClient {
        match source {
            ContentSource::Published => &self.published,
            ContentSource::Preview => &self.preview,
        }
    }
}
