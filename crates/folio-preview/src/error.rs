//! Preview service error types.

use thiserror::Error;

/// Errors from section tree preview operations.
///
/// "Nothing to show" is not an error; see
/// [`TreeOutcome`](crate::TreeOutcome) and [`ContentOutcome`](crate::ContentOutcome).
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The backend request failed.
    #[error(transparent)]
    Api(#[from] folio_api::ApiError),

    /// The section cache write failed.
    #[error(transparent)]
    Cache(#[from] folio_cache::error::CacheError),

    /// The section's structured content could not be parsed.
    #[error(transparent)]
    Document(#[from] folio_core::CoreError),

    /// The backend tree exceeds the configured depth limit.
    #[error("Section tree depth {depth} exceeds limit {max}")]
    TreeTooDeep { depth: usize, max: usize },
}
