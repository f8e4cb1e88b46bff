//! Section tree preview service.
//!
//! Operations, in the order a page uses them:
//! - [`SectionTreePreview::load_tree`]: fetch and publish the tree, then load
//!   and select the initial section.
//! - [`SectionTreePreview::select_node`]: optimistic selection followed by a
//!   content load.
//! - [`SectionTreePreview::load_content`]: fetch an article, publish it and
//!   write it to the local cache.
//! - [`SectionTreePreview::reset_view`]: clear the pane and the selection.
//!
//! Every tree load and content load takes a ticket from a generation
//! counter. A response that arrives after a newer load (or a reset) was
//! started is discarded, so the pane always reflects the most recent request
//! rather than the slowest response.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use folio_api::SectionSource;
use folio_cache::SectionCache;
use folio_config::GeneralConfig;
use folio_core::{
    CacheRecord, FetchOutcome, SectionArticle, StructuredDocument, generate_section_tree,
    tree_depth,
};
use serde::Serialize;
use tokio::sync::watch;

use crate::error::PreviewError;
use crate::state::{CurrentSectionNode, PreviewPhase, SectionTree};

/// Result of [`SectionTreePreview::load_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOutcome {
    /// Content was published and cached.
    Applied,
    /// The backend had no article; state is unchanged.
    Empty,
    /// A newer load superseded this one; the response was dropped.
    Stale,
}

/// Result of [`SectionTreePreview::load_tree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TreeOutcome {
    /// The backend returned no data; state is unchanged.
    NoData,
    /// The repository has no sections; the tree is empty and nothing is selected.
    NoSections,
    /// The tree was published and `section_id` was selected. `content` is
    /// never [`ContentOutcome::Stale`].
    Selected {
        section_id: String,
        content: ContentOutcome,
    },
    /// The tree was published, but a newer load or a reset overtook the
    /// content load of `section_id`. Nothing was selected.
    Superseded { section_id: String },
    /// A newer tree load or a reset was started before the tree arrived.
    /// Nothing was published.
    Stale,
}

/// Owns the tree, selection and current-section state of one preview pane.
pub struct SectionTreePreview<S> {
    source: S,
    cache: SectionCache,
    max_tree_depth: usize,
    tree: watch::Sender<SectionTree>,
    current: watch::Sender<CurrentSectionNode>,
    generation: AtomicU64,
    tree_generation: AtomicU64,
}

impl<S: SectionSource> SectionTreePreview<S> {
    /// Create a preview with default limits.
    pub fn new(source: S, cache: SectionCache) -> Self {
        Self::with_config(source, cache, &GeneralConfig::default())
    }

    /// Create a preview using limits from configuration.
    pub fn with_config(source: S, cache: SectionCache, config: &GeneralConfig) -> Self {
        Self {
            source,
            cache,
            max_tree_depth: config.max_tree_depth,
            tree: watch::Sender::new(SectionTree::default()),
            current: watch::Sender::new(CurrentSectionNode::default()),
            generation: AtomicU64::new(0),
            tree_generation: AtomicU64::new(0),
        }
    }

    /// Load the section tree of `repository_id` and select a section.
    ///
    /// The selected section is `initial_section_id` when given (e.g., after a
    /// page refresh), otherwise the first root. The tree is published before
    /// the content request, and the selection only after the content load
    /// completes.
    ///
    /// Like content loads, the tree load takes its ticket when called. Starting
    /// it invalidates in-flight content loads. A tree response that arrives
    /// after a newer `load_tree` or [`reset_view`](Self::reset_view) publishes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError`] if a request fails, the tree is deeper than
    /// the configured limit, the content cannot be parsed, or the cache
    /// write fails.
    pub fn load_tree<'a>(
        &'a self,
        repository_id: &'a str,
        initial_section_id: Option<&'a str>,
    ) -> impl Future<Output = Result<TreeOutcome, PreviewError>> + 'a {
        let ticket = self.tree_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.apply_tree(ticket, repository_id, initial_section_id)
    }

    async fn apply_tree(
        &self,
        ticket: u64,
        repository_id: &str,
        initial_section_id: Option<&str>,
    ) -> Result<TreeOutcome, PreviewError> {
        let outcome = self.source.section_tree(repository_id).await?;

        if self.tree_generation.load(Ordering::SeqCst) != ticket {
            tracing::warn!(repository_id, ticket, "dropping stale section tree");
            return Ok(TreeOutcome::Stale);
        }

        let FetchOutcome::Loaded(nodes) = outcome else {
            tracing::warn!(repository_id, "section tree response carried no data");
            return Ok(TreeOutcome::NoData);
        };

        let Some(first) = nodes.first() else {
            self.tree.send_modify(|tree| {
                tree.meta_tree.clear();
                tree.selected_section_id.clear();
                tree.loaded = true;
            });
            tracing::info!(repository_id, "repository has no sections");
            return Ok(TreeOutcome::NoSections);
        };

        let depth = tree_depth(&nodes);
        if depth > self.max_tree_depth {
            return Err(PreviewError::TreeTooDeep {
                depth,
                max: self.max_tree_depth,
            });
        }

        let section_id = initial_section_id.map_or_else(|| first.key.clone(), str::to_string);
        let meta_tree = generate_section_tree(&nodes);
        self.tree.send_modify(|tree| {
            tree.meta_tree = meta_tree;
            tree.loaded = true;
        });

        let content = self.load_content(&section_id, repository_id).await?;
        if content == ContentOutcome::Stale {
            tracing::debug!(%section_id, "initial selection superseded");
            return Ok(TreeOutcome::Superseded { section_id });
        }
        self.publish_selection(&section_id);
        tracing::info!(repository_id, %section_id, ?content, "section tree loaded");
        Ok(TreeOutcome::Selected {
            section_id,
            content,
        })
    }

    /// Select `section_id` and load its content.
    ///
    /// The selection is published before this returns, so a tree widget can
    /// highlight the node while the returned future is still pending. Until
    /// that future completes, the selection and the current content may
    /// refer to different sections.
    pub fn select_node<'a>(
        &'a self,
        section_id: &'a str,
        repository_id: &'a str,
    ) -> impl Future<Output = Result<ContentOutcome, PreviewError>> + 'a {
        self.publish_selection(section_id);
        self.load_content(section_id, repository_id)
    }

    /// Fetch the article of `section_id`, publish it and cache it.
    ///
    /// The load's ticket is issued when this is called, so loads are ordered
    /// by call, not by when their futures are first polled.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError`] if the request fails, the structured content
    /// is malformed (nothing is published in that case), or the cache write
    /// fails (the content is already published in that case).
    pub fn load_content<'a>(
        &'a self,
        section_id: &'a str,
        repository_id: &'a str,
    ) -> impl Future<Output = Result<ContentOutcome, PreviewError>> + 'a {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.apply_article(ticket, section_id, repository_id)
    }

    async fn apply_article(
        &self,
        ticket: u64,
        section_id: &str,
        repository_id: &str,
    ) -> Result<ContentOutcome, PreviewError> {
        let outcome = self.source.section_article(section_id).await?;

        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::warn!(section_id, ticket, "dropping stale section content");
            return Ok(ContentOutcome::Stale);
        }

        let FetchOutcome::Loaded(SectionArticle {
            article,
            entity_list,
        }) = outcome
        else {
            tracing::warn!(section_id, "section article response carried no data");
            return Ok(ContentOutcome::Empty);
        };

        let content = StructuredDocument::parse(&article.content)?;
        let record = CacheRecord::new(
            section_id,
            article.title.as_str(),
            article.content_html.as_str(),
            repository_id,
        );
        self.current.send_modify(|current| {
            *current = CurrentSectionNode {
                title: article.title,
                content,
                content_html: article.content_html,
                section_id: section_id.to_string(),
                entity_list,
            };
        });

        self.cache.put(&record).await?;
        Ok(ContentOutcome::Applied)
    }

    /// Clear the pane and the selection. The tree is kept.
    ///
    /// In-flight tree and content loads become stale.
    pub fn reset_view(&self) {
        self.tree_generation.fetch_add(1, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.current
            .send_modify(|current| *current = CurrentSectionNode::default());
        self.tree
            .send_modify(|tree| tree.selected_section_id.clear());
        tracing::debug!("section view reset");
    }

    fn publish_selection(&self, section_id: &str) {
        self.tree.send_modify(|tree| {
            tree.selected_section_id.clear();
            tree.selected_section_id.push_str(section_id);
        });
    }
}

impl<S> SectionTreePreview<S> {
    /// Snapshot of the tree state.
    pub fn tree(&self) -> SectionTree {
        self.tree.borrow().clone()
    }

    /// Snapshot of the current section.
    pub fn current(&self) -> CurrentSectionNode {
        self.current.borrow().clone()
    }

    pub fn phase(&self) -> PreviewPhase {
        PreviewPhase::of(&self.tree.borrow())
    }

    /// Receiver notified on every tree or selection change.
    pub fn subscribe_tree(&self) -> watch::Receiver<SectionTree> {
        self.tree.subscribe()
    }

    /// Receiver notified on every current-section change.
    pub fn subscribe_current(&self) -> watch::Receiver<CurrentSectionNode> {
        self.current.subscribe()
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub const fn cache(&self) -> &SectionCache {
        &self.cache
    }
}
