//! Source error types.

use thiserror::Error;

/// Errors that can occur when fetching from the open-data API.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse the response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<sfgraph_http::ApiFailure> for SourceError {
    fn from(failure: sfgraph_http::ApiFailure) -> Self {
        Self::Api {
            status: failure.status,
            message: failure.message,
        }
    }
}
