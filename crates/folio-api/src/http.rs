//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 with `Retry-After` parsing,
//! non-success → [`ApiError::Api`]) and envelope decoding so endpoint
//! modules stay focused on request construction.

use folio_core::FetchOutcome;
use serde::de::DeserializeOwned;

use crate::ApiResponse;
use crate::error::ApiError;
use crate::path::ApiPath;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ApiError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Decode a response body as an [`ApiResponse`] envelope.
pub fn decode_envelope<T: DeserializeOwned>(
    path: ApiPath,
    body: &str,
) -> Result<FetchOutcome<T>, ApiError> {
    let envelope: ApiResponse<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(format!("{path}: {e}")))?;
    Ok(envelope.into_outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SectionTreeNode;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(::http::Response::builder().status(status).body("").unwrap())
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        assert_eq!(parse_retry_after(&mock_response(429)), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let err = check_response(mock_response(502)).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 502, .. }));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200)).await.is_ok());
    }

    #[test]
    fn decode_envelope_with_data() {
        let outcome: FetchOutcome<Vec<SectionTreeNode>> = decode_envelope(
            ApiPath::GetNormalSectionTree,
            r#"{"code":0,"data":[{"key":"s1","title":"Intro"}]}"#,
        )
        .unwrap();
        assert_eq!(outcome.into_option().map(|t| t.len()), Some(1));
    }

    #[test]
    fn decode_envelope_reports_path_on_parse_error() {
        let err = decode_envelope::<Vec<SectionTreeNode>>(ApiPath::GetNormalSectionTree, "<html>")
            .unwrap_err();
        match err {
            ApiError::Parse(msg) => assert!(msg.starts_with("/api/noauth/section/normal-tree")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
