//! Section tree and section article requests.

use folio_core::{FetchOutcome, SectionArticle, SectionTreeNode};
use serde::Serialize;

use crate::{ApiClient, error::ApiError, path::ApiPath};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SectionTreeRequest<'a> {
    repository_entity_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SectionArticleRequest<'a> {
    section_id: &'a str,
}

impl ApiClient {
    /// Fetch the section forest of a repository, roots in display order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_normal_section_tree(
        &self,
        repository_entity_id: &str,
    ) -> Result<FetchOutcome<Vec<SectionTreeNode>>, ApiError> {
        let body = SectionTreeRequest {
            repository_entity_id,
        };
        self.post(ApiPath::GetNormalSectionTree, &body).await
    }

    /// Fetch a section's article and its linked entities.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_section_article(
        &self,
        section_id: &str,
    ) -> Result<FetchOutcome<SectionArticle>, ApiError> {
        let body = SectionArticleRequest { section_id };
        self.post(ApiPath::GetSectionArticle, &body).await
    }
}
