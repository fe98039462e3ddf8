//! Cross-cutting error types for sfgraph.
//!
//! Stage-specific errors (`SourceError`, `StoreError`, `PublishError`) live in
//! their respective crates. They converge into `anyhow` in `sfgraph-cli`.

use thiserror::Error;

/// Errors that can be raised by any sfgraph crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The OS random source could not be read.
    #[error("Random source unavailable: {0}")]
    Random(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
