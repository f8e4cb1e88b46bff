//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::SectionCache;
use crate::error::CacheError;

const MIGRATION_001: &str = include_str!("../migrations/001_section_cache.sql");

impl SectionCache {
    pub(crate) async fn run_migrations(&self) -> Result<(), CacheError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| CacheError::Migration(format!("001_section_cache: {e}")))?;
        Ok(())
    }
}
