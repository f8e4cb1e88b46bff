//! Backend endpoint paths.

use std::fmt;

/// Endpoints used by Folio. All are unauthenticated `POST`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiPath {
    GetNoAuthCommentByEntityId,
    GetNormalSectionTree,
    GetSectionArticle,
}

impl ApiPath {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetNoAuthCommentByEntityId => "/api/noauth/comment/get-by-entity-id",
            Self::GetNormalSectionTree => "/api/noauth/section/normal-tree",
            Self::GetSectionArticle => "/api/noauth/section/article",
        }
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
