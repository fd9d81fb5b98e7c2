//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use breathwork_config::ConfigError;
use breathwork_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────

    #[error("Unusable access token: {message}")]
    #[diagnostic(
        code(breathwork::auth_failed),
        help(
            "Verify CONTENTFUL_ACCESS_TOKEN (or CONTENTFUL_PREVIEW_ACCESS_TOKEN with --preview).\n\
             Tokens are listed under Settings > API keys in the Contentful web app."
        )
    )]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(breathwork::not_found),
        help("Run: breathwork {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    #[error("No Contentful space configured")]
    #[diagnostic(
        code(breathwork::no_config),
        help(
            "Set CONTENTFUL_SPACE_ID and CONTENTFUL_ACCESS_TOKEN, or add a [contentful]\n\
             section to the config file.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(breathwork::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(breathwork::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(breathwork::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(breathwork::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(breathwork::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(inner) => CliError::Config(inner),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

// Content reads absorb their own failures, so the only core errors the CLI
// sees come from building clients out of the configuration.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Config { message } => CliError::Validation {
                field: "contentful".into(),
                reason: message,
            },
            other => CliError::Validation {
                field: "contentful".into(),
                reason: other.to_string(),
            },
        }
    }
}
