//! # folio-preview
//!
//! Section tree preview: loads a repository's section tree, tracks the
//! selected section, loads and caches the selected section's content.
//!
//! State lives in a [`SectionTreePreview`] value rather than in globals.
//! Observers subscribe to [`SectionTree`] and [`CurrentSectionNode`] through
//! `tokio::sync::watch` receivers; only the service writes.
//!
//! ```text
//! NoTreeLoaded ──load_tree(empty)──▶ TreeLoaded/NoSelection
//!      │                                   │ select_node
//!      └──load_tree(non-empty)──▶ TreeLoaded/NodeSelected ◀─┘
//!                                          │ reset_view
//!                                          ▼
//!                                 TreeLoaded/NoSelection
//! ```

pub mod error;
pub mod modal;
pub mod service;
pub mod state;

#[cfg(test)]
mod test_support;

pub use error::PreviewError;
pub use modal::{EntityOption, SectionModal, SectionModalForm, SectionOperation};
pub use service::{ContentOutcome, SectionTreePreview, TreeOutcome};
pub use state::{CurrentSectionNode, PreviewPhase, SectionTree};
