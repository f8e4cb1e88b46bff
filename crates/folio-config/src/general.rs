//! General client behaviour.

use serde::{Deserialize, Serialize};

/// Deepest section tree accepted from the backend.
const fn default_max_tree_depth() -> usize {
    64
}

/// Default comment page size.
const fn default_page_size() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Trees deeper than this are rejected before being built.
    #[serde(default = "default_max_tree_depth")]
    pub max_tree_depth: usize,

    /// Page size used when a caller does not pass one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_tree_depth: default_max_tree_depth(),
            default_page_size: default_page_size(),
        }
    }
}
