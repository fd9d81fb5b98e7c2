// ── Core error types ──
//
// Domain-level errors from breathwork-core. Content reads never surface
// these to callers (every fetch absorbs its own failure); they exist for
// logging and for the testimonial write path. The `From<breathwork_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the content API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Content API rejected the access token: {message}")]
    AuthenticationFailed { message: String },

    #[error("Content API request timed out")]
    Timeout,

    #[error("Content API rate limit hit -- retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Malformed content API response: {message}")]
    MalformedResponse { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("Content API error: {message}")]
    Api {
        message: String,
        /// The vendor error id (e.g., "InvalidQuery", "ValidationFailed").
        code: Option<String>,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<breathwork_api::Error> for CoreError {
    fn from(err: breathwork_api::Error) -> Self {
        use breathwork_api::Error as ApiError;

        match err {
            ApiError::Authentication { message } => CoreError::AuthenticationFailed { message },
            ApiError::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        code: None,
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            ApiError::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            ApiError::Client(message) => CoreError::Config { message },
            ApiError::RateLimited { retry_after_secs } => {
                CoreError::RateLimited { retry_after_secs }
            }
            ApiError::Api {
                status: 404,
                message,
                ..
            } => CoreError::NotFound { resource: message },
            ApiError::Api {
                message,
                code,
                status,
                ..
            } => CoreError::Api {
                message,
                code,
                status: Some(status),
            },
            ApiError::Deserialization { message, body: _ } => {
                CoreError::MalformedResponse { message }
            }
        }
    }
}
