//! Configuration for the breathwork server and CLI.
//!
//! TOML file plus environment layering, credential resolution (env, keyring,
//! plaintext), and translation to `breathwork_core::CmsConfig`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use breathwork_core::CmsConfig;
use breathwork_core::config::{
    DEFAULT_DELIVERY_HOST, DEFAULT_ENVIRONMENT, DEFAULT_LOCALE, DEFAULT_MANAGEMENT_HOST,
    DEFAULT_PREVIEW_HOST,
};

/// Service name for system keyring entries.
pub const KEYRING_SERVICE: &str = "breathwork";

const MANAGEMENT_TOKEN_ENV: &str = "CONTENTFUL_MANAGEMENT_TOKEN";
const MANAGEMENT_TOKEN_KEYRING: &str = "management-token";
const ADMIN_TOKEN_ENV: &str = "BREATHWORK_ADMIN__SESSION_TOKEN";
const ADMIN_TOKEN_KEYRING: &str = "admin-session-token";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level configuration shared by the server and the CLI.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub contentful: ContentfulSection,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub admin: AdminSection,
}

/// CMS space, tokens and endpoints.
#[derive(Debug, Deserialize, Serialize)]
pub struct ContentfulSection {
    #[serde(default)]
    pub space_id: String,

    /// Delivery API token (published content).
    #[serde(default)]
    pub access_token: String,

    /// Preview API token (draft content).
    #[serde(default)]
    pub preview_access_token: String,

    /// Management API token (plaintext; prefer keyring or env var).
    pub management_token: Option<String>,

    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_delivery_host")]
    pub delivery_host: String,

    #[serde(default = "default_preview_host")]
    pub preview_host: String,

    #[serde(default = "default_management_host")]
    pub management_host: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ContentfulSection {
    fn default() -> Self {
        Self {
            space_id: String::new(),
            access_token: String::new(),
            preview_access_token: String::new(),
            management_token: None,
            environment: default_environment(),
            locale: default_locale(),
            delivery_host: default_delivery_host(),
            preview_host: default_preview_host(),
            management_host: default_management_host(),
            timeout: default_timeout(),
        }
    }
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.into()
}
fn default_locale() -> String {
    DEFAULT_LOCALE.into()
}
fn default_delivery_host() -> String {
    DEFAULT_DELIVERY_HOST.into()
}
fn default_preview_host() -> String {
    DEFAULT_PREVIEW_HOST.into()
}
fn default_management_host() -> String {
    DEFAULT_MANAGEMENT_HOST.into()
}
fn default_timeout() -> u64 {
    30
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerSection {
    /// Listen address, e.g. "0.0.0.0:3000".
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:3000".into()
}

impl ServerSection {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_bind(&self.bind)
    }
}

/// Parse a listen address (`host:port`, IP literals only).
pub fn parse_bind(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|e| ConfigError::Validation {
        field: "server.bind".into(),
        reason: format!("'{raw}' is not a socket address: {e}"),
    })
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AdminSection {
    /// Bearer token that authenticates admin requests (plaintext; prefer
    /// keyring or env var).
    pub session_token: Option<String>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "breathwork", "breathwork").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("breathwork");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Layered sources: defaults, then the TOML file at `path`, then the
/// environment (`CONTENTFUL_*` for the CMS section, `BREATHWORK_*` with
/// `__` as the section separator for everything else).
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("CONTENTFUL_").map(|key| format!("contentful.{key}").into()))
        .merge(Env::prefixed("BREATHWORK_").split("__"))
}

/// Load the full Config from `path` (or the platform config path) plus the
/// environment. A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    let config: Config = figment(&path).extract()?;
    Ok(config)
}

// ── Credential resolution ───────────────────────────────────────────

fn keyring_secret(user: &str) -> Option<String> {
    keyring::Entry::new(KEYRING_SERVICE, user)
        .ok()?
        .get_password()
        .ok()
}

/// First non-empty value from: env var, keyring, plaintext config.
fn resolve_secret(
    env_var: &str,
    keyring_user: &str,
    plaintext: Option<&str>,
    keyring: impl Fn(&str) -> Option<String>,
) -> Option<SecretString> {
    std::env::var(env_var)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| keyring(keyring_user).filter(|v| !v.is_empty()))
        .or_else(|| plaintext.filter(|v| !v.is_empty()).map(str::to_owned))
        .map(SecretString::from)
}

fn validate_host(field: &str, raw: &str) -> Result<String, ConfigError> {
    let url: url::Url = raw.parse().map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

impl Config {
    /// Build the runtime `CmsConfig`, resolving the management token from
    /// env, keyring, then plaintext.
    pub fn to_cms_config(&self) -> Result<CmsConfig, ConfigError> {
        self.cms_config_with(keyring_secret)
    }

    /// The admin session token, resolved from env, keyring, then plaintext.
    /// `None` means no request is ever treated as an admin session.
    pub fn admin_token(&self) -> Option<SecretString> {
        self.admin_token_with(keyring_secret)
    }

    fn cms_config_with(
        &self,
        keyring: impl Fn(&str) -> Option<String>,
    ) -> Result<CmsConfig, ConfigError> {
        let c = &self.contentful;
        Ok(CmsConfig {
            space_id: c.space_id.clone(),
            environment: c.environment.clone(),
            locale: c.locale.clone(),
            delivery_token: SecretString::from(c.access_token.clone()),
            preview_token: SecretString::from(c.preview_access_token.clone()),
            management_token: resolve_secret(
                MANAGEMENT_TOKEN_ENV,
                MANAGEMENT_TOKEN_KEYRING,
                c.management_token.as_deref(),
                keyring,
            ),
            delivery_host: validate_host("contentful.delivery_host", &c.delivery_host)?,
            preview_host: validate_host("contentful.preview_host", &c.preview_host)?,
            management_host: validate_host("contentful.management_host", &c.management_host)?,
            timeout: Duration::from_secs(c.timeout),
        })
    }

    fn admin_token_with(&self, keyring: impl Fn(&str) -> Option<String>) -> Option<SecretString> {
        resolve_secret(
            ADMIN_TOKEN_ENV,
            ADMIN_TOKEN_KEYRING,
            self.admin.session_token.as_deref(),
            keyring,
        )
    }
}
