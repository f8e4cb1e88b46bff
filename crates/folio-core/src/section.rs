//! Backend representations of sections and their articles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node of a repository's section tree, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTreeNode {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SectionTreeNode>>,
}

impl SectionTreeNode {
    #[must_use]
    pub fn leaf(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: None,
        }
    }

    #[must_use]
    pub fn branch(
        key: impl Into<String>,
        title: impl Into<String>,
        children: Vec<Self>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: Some(children),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(Self::count)
            .sum::<usize>()
    }

    /// Depth of this subtree; a leaf has depth 1.
    ///
    /// Walks with an explicit stack so very deep input cannot overflow.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            for child in node.children.iter().flatten() {
                stack.push((child, level + 1));
            }
        }
        max
    }
}

/// A knowledge entity linked to a section.
///
/// Only the identifying fields are typed; everything else the backend sends
/// is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedEntity {
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub entity_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a section article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Serialized structured document.
    pub content: String,
    pub content_html: String,
    pub title: String,
}

/// Response payload of the section article request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionArticle {
    pub article: Article,
    #[serde(default)]
    pub entity_list: Vec<LinkedEntity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_without_children_field_parses_as_leaf() {
        let node: SectionTreeNode = serde_json::from_str(r#"{"key":"s1","title":"Intro"}"#).unwrap();
        assert!(node.children.is_none());
        assert_eq!(node.count(), 1);
        assert_eq!(node.depth(), 1);
    }

    #[test]
    fn count_and_depth_of_nested_tree() {
        let node = SectionTreeNode::branch(
            "a",
            "A",
            vec![
                SectionTreeNode::leaf("b", "B"),
                SectionTreeNode::branch("c", "C", vec![SectionTreeNode::leaf("d", "D")]),
            ],
        );
        assert_eq!(node.count(), 4);
        assert_eq!(node.depth(), 3);
    }

    #[test]
    fn article_payload_uses_camel_case() {
        let payload = r#"{
            "article": {
                "content": "{\"type\":\"doc\"}",
                "contentHtml": "<p>Hello</p>",
                "title": "Intro"
            },
            "entityList": [
                {"entityId": "e1", "entityType": "Concept", "name": "Graph", "weight": 3}
            ]
        }"#;
        let parsed: SectionArticle = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.article.content_html, "<p>Hello</p>");
        assert_eq!(parsed.entity_list[0].entity_id, "e1");
        assert_eq!(parsed.entity_list[0].extra["weight"], 3);
    }

    #[test]
    fn missing_entity_list_defaults_to_empty() {
        let payload = r#"{"article":{"content":"{}","contentHtml":"","title":"T"}}"#;
        let parsed: SectionArticle = serde_json::from_str(payload).unwrap();
        assert!(parsed.entity_list.is_empty());
    }
}
