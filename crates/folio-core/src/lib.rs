//! # folio-core
//!
//! Core types shared across all Folio crates:
//! - Section tree nodes in backend form and UI form
//! - The pure section tree builder
//! - Section articles, linked entities and the structured content document
//! - Comment and pagination types
//! - Cache records written by `folio-cache`
//! - Fetch outcomes and cross-cutting error types

pub mod cache;
pub mod comment;
pub mod document;
pub mod enums;
pub mod errors;
pub mod outcome;
pub mod section;
pub mod tree;

pub use cache::CacheRecord;
pub use comment::{Comment, PageRequest, Paginated};
pub use document::StructuredDocument;
pub use enums::CommentEntityType;
pub use errors::CoreError;
pub use outcome::FetchOutcome;
pub use section::{Article, LinkedEntity, SectionArticle, SectionTreeNode};
pub use tree::{TreeItem, find_item, generate_section_tree, tree_depth};
