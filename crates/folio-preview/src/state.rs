//! Observable state owned by the preview service.

use folio_core::{LinkedEntity, StructuredDocument, TreeItem, find_item};
use serde::{Deserialize, Serialize};

/// The section tree shown in the sidebar and the selected section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTree {
    pub meta_tree: Vec<TreeItem>,
    /// Empty when nothing is selected.
    pub selected_section_id: String,
    /// Set once any tree (possibly empty) has been received.
    #[serde(default)]
    pub loaded: bool,
}

impl SectionTree {
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selected_section_id.is_empty()
    }

    /// The tree item for the current selection, if it is part of the tree.
    #[must_use]
    pub fn selected_item(&self) -> Option<&TreeItem> {
        if !self.has_selection() {
            return None;
        }
        find_item(&self.meta_tree, &self.selected_section_id)
    }
}

/// What the editor/preview pane currently shows.
///
/// `section_id` names the section the other fields were loaded from, or is
/// empty when nothing has been loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentSectionNode {
    pub title: String,
    pub content: StructuredDocument,
    pub content_html: String,
    pub section_id: String,
    pub entity_list: Vec<LinkedEntity>,
}

impl CurrentSectionNode {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.section_id.is_empty()
    }
}

/// Position of the preview in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewPhase {
    NoTreeLoaded,
    NoSelection,
    NodeSelected,
}

impl PreviewPhase {
    #[must_use]
    pub fn of(tree: &SectionTree) -> Self {
        if !tree.loaded {
            Self::NoTreeLoaded
        } else if tree.has_selection() {
            Self::NodeSelected
        } else {
            Self::NoSelection
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoTreeLoaded => "no_tree_loaded",
            Self::NoSelection => "no_selection",
            Self::NodeSelected => "node_selected",
        }
    }
}

impl std::fmt::Display for PreviewPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
