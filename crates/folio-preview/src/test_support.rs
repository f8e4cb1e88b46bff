//! Shared test utilities: a scripted in-process section source.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use folio_api::{ApiError, SectionSource};
use folio_core::{Article, FetchOutcome, SectionArticle, SectionTreeNode};
use tokio::sync::Notify;

/// `SectionSource` answering from fixed tables.
///
/// Unknown repositories and sections answer [`FetchOutcome::Empty`]. A gated
/// section (or repository) holds its response until the gate is notified.
#[derive(Default)]
pub struct ScriptedSource {
    trees: HashMap<String, Vec<SectionTreeNode>>,
    articles: HashMap<String, SectionArticle>,
    failing: HashSet<String>,
    gates: HashMap<String, Arc<Notify>>,
    tree_gates: HashMap<String, Arc<Notify>>,
    article_calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn with_tree(mut self, repository_id: &str, nodes: Vec<SectionTreeNode>) -> Self {
        self.trees.insert(repository_id.to_string(), nodes);
        self
    }

    pub fn with_article(mut self, section_id: &str, article: SectionArticle) -> Self {
        self.articles.insert(section_id.to_string(), article);
        self
    }

    pub fn with_failing_article(mut self, section_id: &str) -> Self {
        self.failing.insert(section_id.to_string());
        self
    }

    pub fn with_gate(mut self, section_id: &str) -> Self {
        self.gates
            .insert(section_id.to_string(), Arc::new(Notify::new()));
        self
    }

    pub fn with_tree_gate(mut self, repository_id: &str) -> Self {
        self.tree_gates
            .insert(repository_id.to_string(), Arc::new(Notify::new()));
        self
    }

    /// Handle used to release a gated repository tree.
    pub fn tree_gate(&self, repository_id: &str) -> Arc<Notify> {
        Arc::clone(&self.tree_gates[repository_id])
    }

    /// Handle used to release a gated section.
    pub fn gate(&self, section_id: &str) -> Arc<Notify> {
        Arc::clone(&self.gates[section_id])
    }

    /// Section ids requested so far, in order.
    pub fn article_calls(&self) -> Vec<String> {
        self.article_calls.lock().unwrap().clone()
    }
}

impl SectionSource for ScriptedSource {
    async fn section_tree(
        &self,
        repository_entity_id: &str,
    ) -> Result<FetchOutcome<Vec<SectionTreeNode>>, ApiError> {
        if let Some(gate) = self.tree_gates.get(repository_entity_id) {
            gate.notified().await;
        }
        Ok(self.trees.get(repository_entity_id).cloned().into())
    }

    async fn section_article(
        &self,
        section_id: &str,
    ) -> Result<FetchOutcome<SectionArticle>, ApiError> {
        self.article_calls
            .lock()
            .unwrap()
            .push(section_id.to_string());
        if let Some(gate) = self.gates.get(section_id) {
            gate.notified().await;
        }
        if self.failing.contains(section_id) {
            return Err(ApiError::Api {
                status: 500,
                message: "scripted failure".into(),
            });
        }
        Ok(self.articles.get(section_id).cloned().into())
    }
}

/// Article whose structured content is a one-paragraph document.
pub fn article(title: &str, html: &str) -> SectionArticle {
    SectionArticle {
        article: Article {
            content: r#"{"type":"doc","content":[{"type":"paragraph"}]}"#.into(),
            content_html: html.into(),
            title: title.into(),
        },
        entity_list: Vec::new(),
    }
}

/// `[{s1 Intro}, {s2 Body [{s2a Sub}]}]`
pub fn example_forest() -> Vec<SectionTreeNode> {
    vec![
        SectionTreeNode::leaf("s1", "Intro"),
        SectionTreeNode::branch("s2", "Body", vec![SectionTreeNode::leaf("s2a", "Sub")]),
    ]
}
