//! Publish error types.

use thiserror::Error;

/// Errors from the content store, the Geo API, and the chain.
#[derive(Debug, Error)]
pub enum PublishError {
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

    /// Failed to parse a response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The private key does not decode to a signing key.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// Wallet or provider setup failed.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// The transaction could not be built or was rejected by the node.
    #[error("transaction error: {0}")]
    Transaction(String),

    /// Identifier generation failed.
    #[error(transparent)]
    Core(#[from] sfgraph_core::CoreError),
}

impl From<sfgraph_http::ApiFailure> for PublishError {
    fn from(failure: sfgraph_http::ApiFailure) -> Self {
        Self::Api {
            status: failure.status,
            message: failure.message,
        }
    }
}
