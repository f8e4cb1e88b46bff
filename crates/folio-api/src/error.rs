//! Backend client error types.

use thiserror::Error;

/// Errors that can occur when talking to the knowledge-base backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend returned 429 Too Many Requests. Never retried here.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the backend asked the caller to wait.
        retry_after_secs: u64,
    },

    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] folio_config::ConfigError),
}
