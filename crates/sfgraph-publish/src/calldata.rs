//! Edit calldata retrieval.

use serde::{Deserialize, Serialize};
use sfgraph_http::check_response;

use crate::GeoClient;
use crate::error::PublishError;

/// Body of the calldata request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalldataRequest {
    pub space_id: String,
    pub cid: String,
    pub network: String,
}

/// Target contract and hex-encoded input for the edit transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Calldata {
    pub to: String,
    pub data: String,
}

impl Calldata {
    /// `data` with a `0x` prefix.
    #[must_use]
    pub fn hex_data(&self) -> String {
        if self.data.starts_with("0x") {
            self.data.clone()
        } else {
            format!("0x{}", self.data)
        }
    }
}

impl GeoClient {
    /// Fetch calldata for publishing content `cid` into `space_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Api`] on a non-success status,
    /// [`PublishError::Http`] on transport failure, and
    /// [`PublishError::Parse`] if the body lacks `to` or `data`.
    pub async fn edit_calldata(
        &self,
        space_id: &str,
        cid: &str,
    ) -> Result<Calldata, PublishError> {
        let url = self.config.calldata_url(&urlencoding::encode(space_id));
        let request = CalldataRequest {
            space_id: space_id.to_string(),
            cid: cid.to_string(),
            network: self.config.network.clone(),
        };
        tracing::info!(%url, %space_id, %cid, "fetching edit calldata");
        tracing::debug!(?request, "calldata request");

        let resp = check_response(self.http.post(&url).json(&request).send().await?).await?;
        let body = resp.text().await?;
        let calldata: Calldata = serde_json::from_str(&body)
            .map_err(|e| PublishError::Parse(format!("calldata response: {e}")))?;
        tracing::info!(to = %calldata.to, "received calldata");
        Ok(calldata)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("abcd", "0xabcd")]
    #[case("0xabcd", "0xabcd")]
    #[case("", "0x")]
    fn data_gets_hex_prefix(#[case] data: &str, #[case] expected: &str) {
        let calldata = Calldata {
            to: "0x0".into(),
            data: data.into(),
        };
        assert_eq!(calldata.hex_data(), expected);
    }

    #[test]
    fn request_uses_camel_case_keys() {
        let request = CalldataRequest {
            space_id: "S1".into(),
            cid: "ipfs://bafy".into(),
            network: "TESTNET".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"spaceId": "S1", "cid": "ipfs://bafy", "network": "TESTNET"})
        );
    }

    #[tokio::test]
    async fn unreachable_api_is_an_error() {
        let client = GeoClient::new(sfgraph_config::GeoConfig {
            api_url: "http://127.0.0.1:9".into(),
            ..Default::default()
        });
        assert!(matches!(
            client.edit_calldata("S1", "cid").await,
            Err(PublishError::Http(_))
        ));
    }
}
