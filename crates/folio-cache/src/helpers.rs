//! Row parsing helpers.

use chrono::{DateTime, Utc};

use crate::error::CacheError;

/// Parse a TEXT column as `DateTime<Utc>`.
///
/// Accepts RFC 3339 and `SQLite`'s `datetime('now')` format
/// (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `CacheError::InvalidRow` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, CacheError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| CacheError::InvalidRow(format!("Failed to parse datetime '{s}': {e}")))
}
