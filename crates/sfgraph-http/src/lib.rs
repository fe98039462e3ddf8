//! # sfgraph-http
//!
//! Status checks shared by the open-data and Geo API clients.
//!
//! Every sfgraph stage treats a non-success response as fatal for that
//! request, so the check is a single mapping to [`ApiFailure`]. Each
//! client's error type converts from it with `?`.

use thiserror::Error;

/// A response with a non-success status, with its body kept for the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API error ({status}): {message}")]
pub struct ApiFailure {
    /// HTTP status code returned by the API.
    pub status: u16,
    /// Response body, empty if it could not be read.
    pub message: String,
}

/// Pass a successful response through, or read its body into an [`ApiFailure`].
///
/// # Errors
///
/// Returns [`ApiFailure`] for any status outside `200..=299`, rate limiting
/// included.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiFailure> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(ApiFailure {
        status: status.as_u16(),
        message: resp.text().await.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

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
        let resp = check_response(mock_response(200, "[]")).await.unwrap();
        assert_eq!(resp.text().await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn failure_keeps_status_and_body() {
        let err = check_response(mock_response(500, "dataset unavailable"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiFailure {
                status: 500,
                message: "dataset unavailable".into(),
            }
        );
        assert_eq!(err.to_string(), "API error (500): dataset unavailable");
    }

    #[tokio::test]
    async fn rate_limit_is_an_api_failure() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", "5")
                .body("slow down")
                .unwrap(),
        );
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.status, 429);
        assert_eq!(err.message, "slow down");
    }
}
