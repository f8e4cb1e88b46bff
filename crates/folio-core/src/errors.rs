//! Cross-cutting error types for Folio.
//!
//! Transport, cache and service errors live in their own crates. `CoreError`
//! covers failures in the domain types themselves.

use thiserror::Error;

/// Errors raised by `folio-core` types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A serialized structured document could not be parsed.
    #[error("Malformed structured document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// A string did not name a known enum variant.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
