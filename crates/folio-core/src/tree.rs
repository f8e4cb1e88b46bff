//! Section tree builder: backend tree → UI tree.

use serde::{Deserialize, Serialize};

use crate::section::SectionTreeNode;

/// A node of the tree widget.
///
/// `data` carries the fields of the backend node this item was built from,
/// without its subtree; the subtree is already in `children`.
/// [`TreeItem::to_node`] rebuilds the full backend node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeItem {
    pub key: String,
    pub title: String,
    /// Display name; always the section title.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeItem>>,
    pub data: SectionTreeNode,
}

impl TreeItem {
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The backend node this item (and its subtree) was built from.
    #[must_use]
    pub fn to_node(&self) -> SectionTreeNode {
        SectionTreeNode {
            key: self.data.key.clone(),
            title: self.data.title.clone(),
            children: self
                .children
                .as_ref()
                .map(|children| children.iter().map(Self::to_node).collect()),
        }
    }

    /// Depth-first search for the item with `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Self> {
        if self.key == key {
            return Some(self);
        }
        self.children
            .iter()
            .flatten()
            .find_map(|child| child.find(key))
    }
}

/// Transform a backend forest into the UI forest.
///
/// Order and shape are preserved exactly. A node without a `children` field
/// becomes a leaf; a node with an empty `children` list keeps an empty list.
#[must_use]
pub fn generate_section_tree(nodes: &[SectionTreeNode]) -> Vec<TreeItem> {
    nodes
        .iter()
        .map(|node| TreeItem {
            key: node.key.clone(),
            title: node.title.clone(),
            name: node.title.clone(),
            children: node.children.as_deref().map(generate_section_tree),
            data: SectionTreeNode::leaf(node.key.as_str(), node.title.as_str()),
        })
        .collect()
}

/// Maximum depth across a forest; `0` for an empty forest.
#[must_use]
pub fn tree_depth(nodes: &[SectionTreeNode]) -> usize {
    nodes.iter().map(SectionTreeNode::depth).max().unwrap_or(0)
}

/// Search a forest for the item with `key`.
#[must_use]
pub fn find_item<'a>(items: &'a [TreeItem], key: &str) -> Option<&'a TreeItem> {
    items.iter().find_map(|item| item.find(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_forest() {
        assert!(generate_section_tree(&[]).is_empty());
        assert_eq!(tree_depth(&[]), 0);
    }

    #[test]
    fn leaf_keeps_no_children_field() {
        let items = generate_section_tree(&[SectionTreeNode::leaf("s1", "Intro")]);
        assert_eq!(items.len(), 1);
        assert!(items[0].is_leaf());
        let json = serde_json::to_value(&items[0]).unwrap();
        assert!(json.get("children").is_none());
    }

    #[test]
    fn empty_children_list_is_kept() {
        let items = generate_section_tree(&[SectionTreeNode::branch("s1", "Intro", vec![])]);
        assert_eq!(items[0].children.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn data_back_references_source_node() {
        let node = SectionTreeNode::branch("s2", "Body", vec![SectionTreeNode::leaf("s2a", "Sub")]);
        let items = generate_section_tree(std::slice::from_ref(&node));
        assert_eq!(items[0].data, SectionTreeNode::leaf("s2", "Body"));
        assert_eq!(items[0].name, "Body");
        assert_eq!(items[0].to_node(), node);
        let child = &items[0].children.as_ref().unwrap()[0];
        assert_eq!(child.data, SectionTreeNode::leaf("s2a", "Sub"));
    }

    #[test]
    fn data_does_not_copy_subtrees() {
        let mut node = SectionTreeNode::leaf("n3", "leaf");
        for level in (0..3).rev() {
            node = SectionTreeNode::branch(format!("n{level}"), "level", vec![node]);
        }
        let items = generate_section_tree(std::slice::from_ref(&node));

        let mut item = &items[0];
        loop {
            assert!(item.data.children.is_none());
            match item.children.as_deref() {
                Some([child]) => item = child,
                _ => break,
            }
        }
        assert_eq!(items[0].to_node(), node);
    }

    #[test]
    fn find_item_descends_into_children() {
        let items = generate_section_tree(&[
            SectionTreeNode::leaf("s1", "Intro"),
            SectionTreeNode::branch("s2", "Body", vec![SectionTreeNode::leaf("s2a", "Sub")]),
        ]);
        assert_eq!(find_item(&items, "s2a").map(|i| i.title.as_str()), Some("Sub"));
        assert!(find_item(&items, "missing").is_none());
    }
}
