//! Comment fetch service.

use folio_core::{Comment, CommentEntityType, FetchOutcome, PageRequest, Paginated};
use serde::Serialize;

use crate::{ApiClient, error::ApiError, path::ApiPath};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentByEntityRequest<'a> {
    entity_type: CommentEntityType,
    entity_id: &'a str,
    #[serde(flatten)]
    page: PageRequest,
}

impl ApiClient {
    /// Fetch one page of comments attached to an entity.
    ///
    /// Pass-through request: no caching and no retries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_comment_by_entity_id(
        &self,
        entity_type: CommentEntityType,
        entity_id: &str,
        page: PageRequest,
    ) -> Result<FetchOutcome<Paginated<Comment>>, ApiError> {
        let body = CommentByEntityRequest {
            entity_type,
            entity_id,
            page,
        };
        self.post(ApiPath::GetNoAuthCommentByEntityId, &body).await
    }
}
