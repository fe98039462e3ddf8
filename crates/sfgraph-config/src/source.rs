//! Open-data source configuration.

use serde::{Deserialize, Serialize};

/// SF Mobile Food Facility Permits dataset.
fn default_endpoint() -> String {
    String::from("https://data.sfgov.org/resource/rqzj-sfat.json")
}

const fn default_limit() -> u32 {
    1000
}

fn default_status() -> String {
    String::from("APPROVED")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Dataset resource URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Maximum rows requested (`$limit`).
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Permit status the query filters on (`$where=status='...'`).
    #[serde(default = "default_status")]
    pub status: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            limit: default_limit(),
            status: default_status(),
        }
    }
}

impl SourceConfig {
    /// The `$where` clause sent to the dataset.
    #[must_use]
    pub fn where_clause(&self) -> String {
        format!("status='{}'", self.status.replace('\'', "''"))
    }
}
