//! Records handed from one pipeline stage to the next.
//!
//! Each is written by exactly one stage and only read by later ones.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Content identifier returned by the content store, with the upload time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContentHashRecord {
    pub hash: String,
    /// Milliseconds since the Unix epoch, as a string.
    pub timestamp: String,
}

impl ContentHashRecord {
    /// Stamp `hash` with the current time.
    #[must_use]
    pub fn now(hash: impl Into<String>) -> Self {
        Self::at(hash, Utc::now())
    }

    #[must_use]
    pub fn at(hash: impl Into<String>, when: DateTime<Utc>) -> Self {
        Self {
            hash: hash.into(),
            timestamp: when.timestamp_millis().to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the hash is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.hash.trim().is_empty() {
            return Err(CoreError::Validation("content hash is empty".into()));
        }
        Ok(())
    }
}

/// A namespace ("space") created on the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpaceRecord {
    pub space_id: String,
    pub space_name: String,
    pub created_at: DateTime<Utc>,
}

impl SpaceRecord {
    #[must_use]
    pub fn new(space_id: impl Into<String>, space_name: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            space_name: space_name.into(),
            created_at: Utc::now(),
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the space id is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.space_id.trim().is_empty() {
            return Err(CoreError::Validation("space id is empty".into()));
        }
        Ok(())
    }
}
