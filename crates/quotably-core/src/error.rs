// ── Core error types ──
//
// User-facing errors from quotably-core. Consumers never see raw HTTP
// status codes or JSON parse failures directly; the
// `From<quotably_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Cannot reach the quote service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<quotably_api::Error> for CoreError {
    fn from(err: quotably_api::Error) -> Self {
        match err {
            quotably_api::Error::Transport(ref e) => {
                if e.is_connect() || e.is_timeout() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            quotably_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            quotably_api::Error::InvalidConfigKind(kind) => CoreError::Config {
                message: format!("Unknown request kind: {kind:?}"),
            },
            quotably_api::Error::Api {
                status: 404,
                message,
            } => CoreError::NotFound { resource: message },
            quotably_api::Error::Api { message, status } => CoreError::Api {
                message,
                status: Some(status),
            },
            quotably_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
