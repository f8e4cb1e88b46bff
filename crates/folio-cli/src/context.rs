use anyhow::Context;
use folio_api::ApiClient;
use folio_cache::SectionCache;
use folio_config::FolioConfig;
use folio_preview::SectionTreePreview;

use crate::cli::GlobalFlags;

/// Load configuration from files and environment, then apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FolioConfig> {
    let mut config = FolioConfig::load_with_dotenv()?;
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
    }
    if let Some(cache_path) = &flags.cache_path {
        config.cache.path.clone_from(cache_path);
    }
    config.validate()?;
    Ok(config)
}

/// Everything a command handler needs.
pub struct AppContext {
    pub config: FolioConfig,
    pub flags: GlobalFlags,
}

impl AppContext {
    pub const fn new(config: FolioConfig, flags: GlobalFlags) -> Self {
        Self { config, flags }
    }

    pub fn api_client(&self) -> anyhow::Result<ApiClient> {
        ApiClient::new(&self.config.api).context(
            "backend is not configured: set api.base_url, FOLIO_API__BASE_URL or --base-url",
        )
    }

    pub async fn open_cache(&self) -> anyhow::Result<SectionCache> {
        let path = self
            .config
            .cache
            .resolved_path()
            .context("no cache directory available: set cache.path or --cache-path")?;
        let path = path
            .to_str()
            .with_context(|| format!("cache path is not valid UTF-8: {}", path.display()))?
            .to_string();
        SectionCache::open_local(&path)
            .await
            .with_context(|| format!("failed to open section cache at {path}"))
    }

    pub async fn preview(&self) -> anyhow::Result<SectionTreePreview<ApiClient>> {
        let client = self.api_client()?;
        let cache = self.open_cache().await?;
        Ok(SectionTreePreview::with_config(
            client,
            cache,
            &self.config.general,
        ))
    }
}
