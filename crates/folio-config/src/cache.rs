//! Local section cache configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Database file for the section cache. Empty means the platform cache
    /// directory (`~/.cache/folio/sections.db` on Linux).
    #[serde(default)]
    pub path: String,
}

impl CacheConfig {
    /// Resolve the database location, or `None` if no cache directory exists.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.path.is_empty() {
            return Some(PathBuf::from(&self.path));
        }
        dirs::cache_dir().map(|p| p.join("folio").join("sections.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = CacheConfig {
            path: "/tmp/folio.db".into(),
        };
        assert_eq!(config.resolved_path(), Some(PathBuf::from("/tmp/folio.db")));
    }
}
