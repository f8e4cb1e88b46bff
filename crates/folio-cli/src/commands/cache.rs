use anyhow::bail;
use serde::Serialize;

use folio_cache::CachedSection;

use crate::cli::CacheCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CachedSectionView {
    #[serde(flatten)]
    record: folio_core::CacheRecord,
    cached_at: String,
}

impl From<CachedSection> for CachedSectionView {
    fn from(cached: CachedSection) -> Self {
        Self {
            record: cached.record,
            cached_at: cached.cached_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct CacheStats {
    sections: u64,
}

/// Handle `folio cache`.
pub async fn handle(action: &CacheCommands, ctx: &AppContext) -> anyhow::Result<()> {
    let cache = ctx.open_cache().await?;
    match action {
        CacheCommands::Show { section } => {
            let Some(cached) = cache.get(section).await? else {
                bail!("section {section} is not cached");
            };
            output(&CachedSectionView::from(cached), ctx.flags.format)
        }
        CacheCommands::List { repository } => {
            let views: Vec<CachedSectionView> = cache
                .list_for_repository(repository)
                .await?
                .into_iter()
                .map(CachedSectionView::from)
                .collect();
            output(&views, ctx.flags.format)
        }
        CacheCommands::Stats => output(
            &CacheStats {
                sections: cache.count().await?,
            },
            ctx.flags.format,
        ),
    }
}
