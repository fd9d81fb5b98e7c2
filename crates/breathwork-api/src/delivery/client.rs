// Delivery / Preview API HTTP client
//
// The published (cdn) and draft (preview) hosts expose the same read-only
// surface; only the host and access token differ, so one client type covers
// both.

use secrecy::SecretString;
use tracing::debug;
use url::Url;

use super::links::resolve_links;
use super::models::EntryCollection;
use super::query::EntryQuery;
use crate::error::Error;
use crate::transport::{TransportConfig, handle_response};

/// Include depth the Delivery API applies when none is requested.
const DEFAULT_INCLUDE: u8 = 1;

/// Async client for one Delivery-style endpoint (published or preview).
///
/// Cheap to clone: the inner `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DeliveryClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `host` authenticated with `token`.
    ///
    /// `host` is the API root (e.g. `https://cdn.contentful.com` or
    /// `https://preview.contentful.com`).
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

    /// The environment root this client reads from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET .../entries` with the given search parameters.
    ///
    /// Link stubs in the returned items are replaced by the resources in
    /// `includes`, up to the requested include depth.
    pub async fn get_entries(&self, query: &EntryQuery) -> Result<EntryCollection, Error> {
        let url = self.base_url.join("entries")?;
        let params = query.to_params();
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(&params).send().await?;
        let collection: EntryCollection = handle_response(resp).await?;

        debug!(
            items = collection.items.len(),
            total = collection.total,
            "entries fetched"
        );
        let depth = query.include_depth().unwrap_or(DEFAULT_INCLUDE);
        Ok(resolve_links(collection, depth))
    }
}

/// `{host}/spaces/{space}/environments/{environment}/`
///
/// Shared with the management client, which uses the same path layout.
pub(crate) fn environment_url(host: &str, space: &str, environment: &str) -> Result<Url, Error> {
    let mut url = Url::parse(host)?;
    let root = url.path().trim_end_matches('/').to_owned();
    url.set_path(&format!(
        "{root}/spaces/{space}/environments/{environment}/"
    ));
    Ok(url)
}
