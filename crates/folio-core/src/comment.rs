//! Comment and pagination types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Zero-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_index: u32,
    pub page_size: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
        }
    }
}

/// A page of results with the backend's total count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Paginated<T> {
    /// Whether pages exist beyond `page`.
    #[must_use]
    pub fn has_more(&self, page: PageRequest) -> bool {
        let seen = (u64::from(page.page_index) + 1).saturating_mul(u64::from(page.page_size));
        seen < self.total
    }
}

/// A single comment. Fields beyond id and content pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
