//! Enumerated values sent over the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Kind of entity a comment thread is attached to.
///
/// Serialized in `PascalCase` to match the backend's entity type constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentEntityType {
    Entity,
    Section,
    Repository,
    Article,
}

impl CommentEntityType {
    pub const ALL: [Self; 4] = [Self::Entity, Self::Section, Self::Repository, Self::Article];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "Entity",
            Self::Section => "Section",
            Self::Repository => "Repository",
            Self::Article => "Article",
        }
    }
}

impl fmt::Display for CommentEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentEntityType {
    type Err = CoreError;

    /// Case-insensitive parse, so CLI input like `section` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "comment entity type",
                value: s.to_string(),
            })
    }
}
