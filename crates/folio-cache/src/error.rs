//! Cache error types.

use thiserror::Error;

/// Errors from section cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A stored row could not be read back.
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// The cache file's directory could not be created.
    #[error("Cache directory error: {0}")]
    Io(#[from] std::io::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
