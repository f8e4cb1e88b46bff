//! # folio-api
//!
//! HTTP client for the knowledge-base backend.
//!
//! Every endpoint is a JSON `POST` returning the backend's response envelope
//! (`{code, message, data}`). A missing `data` field is surfaced as
//! [`FetchOutcome::Empty`]; transport and status failures as [`ApiError`].
//!
//! - Comments: [`ApiClient::get_comment_by_entity_id`]
//! - Section tree: [`ApiClient::get_normal_section_tree`]
//! - Section article: [`ApiClient::get_section_article`]
//!
//! [`SectionSource`] is the seam the preview service depends on, so the
//! service can run against an in-process source in tests.

pub mod comment;
pub mod section;

mod error;
mod http;
mod path;

pub use error::ApiError;
pub use path::ApiPath;

use std::future::Future;
use std::time::Duration;

use folio_config::ApiConfig;
use folio_core::{FetchOutcome, SectionArticle, SectionTreeNode};
use serde::{Deserialize, Serialize};

// ── Types ──────────────────────────────────────────────────────────

/// Response envelope shared by all backend endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Drop the envelope, keeping only whether data was present.
    pub fn into_outcome(self) -> FetchOutcome<T> {
        self.data.into()
    }
}

/// Source of section trees and articles.
pub trait SectionSource: Send + Sync {
    /// Fetch the section forest of a repository.
    fn section_tree(
        &self,
        repository_entity_id: &str,
    ) -> impl Future<Output = Result<FetchOutcome<Vec<SectionTreeNode>>, ApiError>> + Send;

    /// Fetch the article body and linked entities of a section.
    fn section_article(
        &self,
        section_id: &str,
    ) -> impl Future<Output = Result<FetchOutcome<SectionArticle>, ApiError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the knowledge-base backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if no base URL is configured, or
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url()?.to_string();
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: ApiPath) -> String {
        format!("{}{}", self.base_url, path.as_str())
    }

    /// POST `body` as JSON to `path` and unwrap the response envelope.
    async fn post<B, T>(&self, path: ApiPath, body: &B) -> Result<FetchOutcome<T>, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let resp = http::check_response(self.http.post(&url).json(body).send().await?).await?;
        let text = resp.text().await?;
        let outcome = http::decode_envelope::<T>(path, &text)?;
        if outcome.is_empty() {
            tracing::debug!(%url, "response carried no data");
        }
        Ok(outcome)
    }
}

impl SectionSource for ApiClient {
    async fn section_tree(
        &self,
        repository_entity_id: &str,
    ) -> Result<FetchOutcome<Vec<SectionTreeNode>>, ApiError> {
        self.get_normal_section_tree(repository_entity_id).await
    }

    async fn section_article(
        &self,
        section_id: &str,
    ) -> Result<FetchOutcome<SectionArticle>, ApiError> {
        self.get_section_article(section_id).await
    }
}
