//! Explicit result of a backend fetch that may legitimately return nothing.

use serde::{Deserialize, Serialize};

/// Outcome of a request whose response envelope may omit `data`.
///
/// Transport and status failures are reported separately as `Err`; this type
/// only separates "the backend returned something" from "nothing to show".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum FetchOutcome<T> {
    Loaded(T),
    Empty,
}

impl<T> FetchOutcome<T> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Convert to an `Option`, discarding the distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            Self::Loaded(value) => FetchOutcome::Loaded(f(value)),
            Self::Empty => FetchOutcome::Empty,
        }
    }
}

impl<T> From<Option<T>> for FetchOutcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Loaded)
    }
}
