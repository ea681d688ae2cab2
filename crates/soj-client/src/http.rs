//! Shared HTTP response checking.
//!
//! Centralizes status-code handling (401 → [`ApiError::Unauthorized`],
//! other non-success → [`ApiError::Api`] with status and body) so the
//! resource and push modules stay focused on request construction and
//! response mapping.

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success.
///
/// # Errors
///
/// - **401 Unauthorized** → [`ApiError::Unauthorized`], so callers can clear
///   stored credentials.
/// - **Other non-success status** → [`ApiError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a checked response body as JSON.
///
/// # Errors
///
/// Propagates [`check_response`] errors; a body that fails to decode maps to
/// [`ApiError::Parse`].
pub async fn read_json<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
    what: &str,
) -> Result<T, ApiError> {
    let resp = check_response(resp).await?;
    resp.json()
        .await
        .map_err(|e| ApiError::Parse(format!("{what}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn unauthorized_is_distinct() {
        let resp = mock_response(401, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn non_success_carries_status_and_body() {
        let resp = mock_response(422, "title is required");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "title is required");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn read_json_maps_decode_failure_to_parse() {
        let resp = mock_response(200, "not json");
        let err = read_json::<serde_json::Value>(resp, "detail").await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
