//! # folio-cache
//!
//! Local persistent cache of viewed sections.
//!
//! Every time a section's content is shown, its rendered HTML is upserted
//! into the `repository` collection keyed by section id. Rows are never
//! evicted. Backed by a local libSQL database file (`:memory:` in tests).

pub mod error;
pub mod helpers;
mod migrations;

use std::path::Path;

use chrono::{DateTime, Utc};
use folio_core::CacheRecord;
use libsql::Builder;

use error::CacheError;
use helpers::parse_datetime;

/// A cache row together with the time it was last written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSection {
    pub record: CacheRecord,
    pub cached_at: DateTime<Utc>,
}

/// Handle to the local section cache.
pub struct SectionCache {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

fn row_to_cached(row: &libsql::Row) -> Result<CachedSection, CacheError> {
    Ok(CachedSection {
        record: CacheRecord {
            id: row.get::<String>(0)?,
            name: row.get::<String>(1)?,
            content: row.get::<String>(2)?,
            section_id: row.get::<String>(3)?,
            repository_entity_id: row.get::<String>(4)?,
        },
        cached_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl SectionCache {
    /// Open (or create) a cache database at `path`.
    ///
    /// Parent directories are created for file paths. Runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the directory cannot be created, the database
    /// cannot be opened, or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, CacheError> {
        if path != ":memory:" {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let cache = Self { db, conn };
        cache.run_migrations().await?;
        tracing::debug!(path, "section cache opened");
        Ok(cache)
    }

    /// Upsert a record by id, replacing any earlier snapshot of the section.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the write fails.
    pub async fn put(&self, record: &CacheRecord) -> Result<(), CacheError> {
        self.conn
            .execute(
                "INSERT INTO repository
                   (id, name, content, section_id, repository_entity_id, write_seq, cached_at)
                 VALUES (?1, ?2, ?3, ?4, ?5,
                   (SELECT COALESCE(MAX(write_seq), 0) + 1 FROM repository),
                   strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                 ON CONFLICT(id) DO UPDATE SET
                   name = ?2, content = ?3, section_id = ?4, repository_entity_id = ?5,
                   write_seq = (SELECT COALESCE(MAX(write_seq), 0) + 1 FROM repository),
                   cached_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                libsql::params![
                    record.id.as_str(),
                    record.name.as_str(),
                    record.content.as_str(),
                    record.section_id.as_str(),
                    record.repository_entity_id.as_str()
                ],
            )
            .await?;
        tracing::debug!(id = %record.id, repository = %record.repository_entity_id, "cached section");
        Ok(())
    }

    /// Read one snapshot by section id.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the query fails or the row is malformed.
    pub async fn get(&self, id: &str) -> Result<Option<CachedSection>, CacheError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, name, content, section_id, repository_entity_id, cached_at
                 FROM repository WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_cached(&row)?)),
            None => Ok(None),
        }
    }

    /// All snapshots last viewed under `repository_entity_id`, most recently
    /// written first. Order follows write order, not `cached_at`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the query fails or a row is malformed.
    pub async fn list_for_repository(
        &self,
        repository_entity_id: &str,
    ) -> Result<Vec<CachedSection>, CacheError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, name, content, section_id, repository_entity_id, cached_at
                 FROM repository WHERE repository_entity_id = ?1
                 ORDER BY write_seq DESC",
                [repository_entity_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_cached(&row)?);
        }
        Ok(results)
    }

    /// Total number of cached sections.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the query fails.
    pub async fn count(&self) -> Result<u64, CacheError> {
        let mut rows = self
            .conn
            .query("SELECT COUNT(*) FROM repository", ())
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CacheError::InvalidRow("COUNT(*) returned no row".into()))?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| CacheError::InvalidRow(format!("negative count: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn test_cache() -> SectionCache {
        SectionCache::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_creates_collection() {
        let cache = test_cache().await;
        let mut rows = cache
            .conn
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["repository"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let cache = test_cache().await;
        cache.run_migrations().await.unwrap();
        assert_eq!(cache.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn put_then_get() {
        let cache = test_cache().await;
        let record = CacheRecord::new("s1", "Intro", "<p>hi</p>", "repo1");
        cache.put(&record).await.unwrap();

        let cached = cache.get("s1").await.unwrap().unwrap();
        assert_eq!(cached.record, record);
        assert!(cache.get("s2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_overwrites_same_section() {
        let cache = test_cache().await;
        cache
            .put(&CacheRecord::new("s1", "Intro", "<p>v1</p>", "repo1"))
            .await
            .unwrap();
        cache
            .put(&CacheRecord::new("s1", "Intro (edited)", "<p>v2</p>", "repo2"))
            .await
            .unwrap();

        assert_eq!(cache.count().await.unwrap(), 1);
        let cached = cache.get("s1").await.unwrap().unwrap();
        assert_eq!(cached.record.content, "<p>v2</p>");
        assert_eq!(cached.record.repository_entity_id, "repo2");
    }

    #[tokio::test]
    async fn list_filters_by_repository() {
        let cache = test_cache().await;
        cache
            .put(&CacheRecord::new("s1", "A", "<p>a</p>", "repo1"))
            .await
            .unwrap();
        cache
            .put(&CacheRecord::new("s2", "B", "<p>b</p>", "repo1"))
            .await
            .unwrap();
        cache
            .put(&CacheRecord::new("t1", "C", "<p>c</p>", "repo2"))
            .await
            .unwrap();

        let ids: Vec<String> = cache
            .list_for_repository("repo1")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.record.id)
            .collect();
        assert_eq!(ids, vec!["s2".to_string(), "s1".to_string()]);
    }

    #[tokio::test]
    async fn rewrite_moves_section_to_front() {
        let cache = test_cache().await;
        for id in ["s1", "s2", "s3"] {
            cache
                .put(&CacheRecord::new(id, id, "<p></p>", "repo1"))
                .await
                .unwrap();
        }
        cache
            .put(&CacheRecord::new("s1", "s1", "<p>again</p>", "repo1"))
            .await
            .unwrap();

        let ids: Vec<String> = cache
            .list_for_repository("repo1")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.record.id)
            .collect();
        assert_eq!(ids, vec!["s1".to_string(), "s3".to_string(), "s2".to_string()]);
    }

    #[tokio::test]
    async fn cached_at_keeps_sub_second_precision() {
        let cache = test_cache().await;
        cache
            .put(&CacheRecord::new("s1", "Intro", "<p>hi</p>", "repo1"))
            .await
            .unwrap();

        let mut rows = cache
            .conn
            .query("SELECT cached_at FROM repository WHERE id = 's1'", ())
            .await
            .unwrap();
        let raw: String = rows.next().await.unwrap().unwrap().get(0).unwrap();
        assert!(raw.contains('.'), "expected fractional seconds in {raw}");
        assert!(parse_datetime(&raw).is_ok());
    }

    #[tokio::test]
    async fn file_backed_cache_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sections.db");
        let path = path.to_str().unwrap();

        {
            let cache = SectionCache::open_local(path).await.unwrap();
            cache
                .put(&CacheRecord::new("s1", "Intro", "<p>hi</p>", "repo1"))
                .await
                .unwrap();
        }

        let reopened = SectionCache::open_local(path).await.unwrap();
        assert_eq!(reopened.count().await.unwrap(), 1);
    }
}
