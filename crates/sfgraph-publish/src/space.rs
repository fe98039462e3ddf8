//! Space deployment.

use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::GeoClient;
use crate::error::PublishError;

/// Body of the deploy request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRequest {
    pub initial_editor_address: String,
    pub space_name: String,
}

/// A space returned by the deploy endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedSpace {
    pub space_id: String,
    /// Full response body, kept for logging.
    pub response: Value,
}

impl GeoClient {
    /// Ask the Geo API to deploy a new space.
    ///
    /// A non-success status is logged as an error; the body is parsed
    /// regardless and decides the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Http`] on transport failure and
    /// [`PublishError::Parse`] if the body is not JSON or has no `spaceId`.
    pub async fn deploy_space(
        &self,
        request: &DeployRequest,
    ) -> Result<DeployedSpace, PublishError> {
        let url = self.config.deploy_url();
        tracing::info!(
            %url,
            editor = %request.initial_editor_address,
            space_name = %request.space_name,
            "deploying space"
        );

        let started = Instant::now();
        let resp = self.http.post(&url).json(request).send().await?;
        let status = resp.status();
        tracing::info!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "deploy request completed"
        );
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "deploy returned an error status");
        }
        for (name, value) in resp.headers() {
            tracing::debug!(header = %name, value = ?value, "deploy response header");
        }

        let body = resp.text().await?;
        tracing::debug!(%body, "deploy response");
        parse_deploy_response(&body)
    }
}

/// Parse the deploy endpoint's response body.
///
/// # Errors
///
/// Returns [`PublishError::Parse`] if `body` is not JSON or lacks a string
/// `spaceId`.
pub fn parse_deploy_response(body: &str) -> Result<DeployedSpace, PublishError> {
    let response: Value = serde_json::from_str(body)
        .map_err(|e| PublishError::Parse(format!("deploy response is not JSON: {e}")))?;
    let space_id = response
        .get("spaceId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| PublishError::Parse(format!("deploy response has no spaceId: {body}")))?
        .to_string();
    Ok(DeployedSpace { space_id, response })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_uses_camel_case_keys() {
        let request = DeployRequest {
            initial_editor_address: "0xAbC".into(),
            space_name: "San Francisco Restaurants".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"initialEditorAddress": "0xAbC", "spaceName": "San Francisco Restaurants"})
        );
    }

    #[test]
    fn parses_space_id() {
        let space = parse_deploy_response(r#"{"spaceId":"Q5Y6Lh8XGxCvjvKoa5yNgA"}"#).unwrap();
        assert_eq!(space.space_id, "Q5Y6Lh8XGxCvjvKoa5yNgA");
    }

    #[test]
    fn non_json_body_is_parse_error() {
        let err = parse_deploy_response("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PublishError::Parse(_)));
    }

    #[test]
    fn missing_space_id_is_parse_error() {
        let err = parse_deploy_response(r#"{"error":"rate limited"}"#).unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }
}
