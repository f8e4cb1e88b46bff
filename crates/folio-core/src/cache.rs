//! Snapshot of a viewed section stored in the local cache.

use serde::{Deserialize, Serialize};

/// Denormalized copy of a section's rendered content, keyed by section id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheRecord {
    /// Always equal to `section_id`.
    pub id: String,
    /// Section title.
    pub name: String,
    /// Rendered HTML.
    pub content: String,
    pub section_id: String,
    pub repository_entity_id: String,
}

impl CacheRecord {
    #[must_use]
    pub fn new(
        section_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        repository_entity_id: impl Into<String>,
    ) -> Self {
        let section_id = section_id.into();
        Self {
            id: section_id.clone(),
            name: name.into(),
            content: content.into(),
            section_id,
            repository_entity_id: repository_entity_id.into(),
        }
    }
}
