//! Knowledge-graph API configuration: content store, space deployment and
//! calldata endpoints, and the labels attached to published edits.

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    String::from("https://api-testnet.grc-20.thegraph.com")
}

fn default_network() -> String {
    String::from("TESTNET")
}

fn default_space_name() -> String {
    String::from("San Francisco Restaurants")
}

fn default_edit_name() -> String {
    String::from("San Francisco Restaurants Data")
}

fn default_edit_author() -> String {
    String::from("San Francisco Restaurant Data Publisher")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoConfig {
    /// Base URL of the graph API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Network name sent with calldata requests.
    #[serde(default = "default_network")]
    pub network: String,

    /// Name given to a newly created space.
    #[serde(default = "default_space_name")]
    pub space_name: String,

    /// Name of the published edit.
    #[serde(default = "default_edit_name")]
    pub edit_name: String,

    /// Author label of the published edit.
    #[serde(default = "default_edit_author")]
    pub edit_author: String,

    /// Upload URL of the content store. If empty, built from `api_url`.
    #[serde(default)]
    pub content_store_url: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            network: default_network(),
            space_name: default_space_name(),
            edit_name: default_edit_name(),
            edit_author: default_edit_author(),
            content_store_url: String::new(),
        }
    }
}

impl GeoConfig {
    fn base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Space deployment endpoint.
    #[must_use]
    pub fn deploy_url(&self) -> String {
        format!("{}/deploy", self.base())
    }

    /// Calldata endpoint for committing an edit into `space_id`.
    #[must_use]
    pub fn calldata_url(&self, space_id: &str) -> String {
        format!("{}/space/{space_id}/edit/calldata", self.base())
    }

    /// Returns the custom `content_store_url` if set, otherwise builds it
    /// from `api_url`.
    #[must_use]
    pub fn content_store_url(&self) -> String {
        if self.content_store_url.is_empty() {
            format!("{}/ipfs/upload-edit", self.base())
        } else {
            self.content_store_url.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_api_url() {
        let config = GeoConfig {
            api_url: "https://example.test/".into(),
            ..Default::default()
        };
        assert_eq!(config.deploy_url(), "https://example.test/deploy");
        assert_eq!(
            config.calldata_url("abc"),
            "https://example.test/space/abc/edit/calldata"
        );
        assert_eq!(
            config.content_store_url(),
            "https://example.test/ipfs/upload-edit"
        );
    }

    #[test]
    fn explicit_content_store_url_wins() {
        let config = GeoConfig {
            content_store_url: "http://localhost:5001/upload".into(),
            ..Default::default()
        };
        assert_eq!(config.content_store_url(), "http://localhost:5001/upload");
    }

    #[test]
    fn default_labels() {
        let config = GeoConfig::default();
        assert_eq!(config.network, "TESTNET");
        assert_eq!(config.space_name, "San Francisco Restaurants");
        assert_eq!(config.edit_author, "San Francisco Restaurant Data Publisher");
    }
}
