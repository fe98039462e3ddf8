//! Content-addressed upload of edits.

use async_trait::async_trait;
use serde_json::Value;

use sfgraph_core::ids::IdSource;
use sfgraph_http::check_response;

use crate::GeoClient;
use crate::edit::{Conversion, Edit, convert_operations};
use crate::error::PublishError;

/// Destination for published edits.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Upload `edit` and return its content identifier.
    async fn publish_edit(&self, edit: &Edit) -> Result<String, PublishError>;
}

#[async_trait]
impl ContentStore for GeoClient {
    async fn publish_edit(&self, edit: &Edit) -> Result<String, PublishError> {
        let url = self.config.content_store_url();
        tracing::info!(%url, ops = edit.ops.len(), name = %edit.name, "uploading edit");

        let resp = check_response(self.http.post(&url).json(edit).send().await?).await?;
        let body = resp.text().await?;
        let cid = extract_content_id(&body)?;
        tracing::info!(%cid, "edit uploaded");
        Ok(cid)
    }
}

/// Outcome of [`publish_operations`].
#[derive(Debug, Clone)]
pub struct Published {
    pub cid: String,
    pub total: usize,
    pub converted: usize,
    pub dropped: usize,
}

/// Convert `records`, bundle them into an edit named `name` by `author`, and
/// upload it to `store`.
///
/// Records that fail to convert are skipped; only the upload itself can
/// fail the publish.
///
/// # Errors
///
/// Returns [`PublishError`] from the store, or [`PublishError::Core`] if
/// relation ids cannot be generated.
pub async fn publish_operations<S: ContentStore + ?Sized>(
    store: &S,
    name: &str,
    author: &str,
    records: &[Value],
    ids: &mut impl IdSource,
) -> Result<Published, PublishError> {
    let Conversion { ops, total, dropped } = convert_operations(records, ids)?;
    let converted = ops.len();
    let edit = Edit {
        name: name.to_string(),
        author: author.to_string(),
        ops,
    };
    let cid = store.publish_edit(&edit).await?;
    Ok(Published {
        cid,
        total,
        converted,
        dropped,
    })
}

/// Pull the content identifier out of an upload response.
///
/// JSON bodies are searched for the first non-empty `cid`, `ipfsHash` or
/// `hash`. A body with none of them (or that is not JSON) is taken whole as
/// the identifier.
///
/// # Errors
///
/// Returns [`PublishError::Parse`] for a blank body.
pub fn extract_content_id(body: &str) -> Result<String, PublishError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(PublishError::Parse(
            "content store returned an empty body".into(),
        ));
    }
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return Ok(body.to_string());
    };
    Ok(["cid", "ipfsHash", "hash"]
        .into_iter()
        .find_map(|key| {
            json.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|cid| !cid.is_empty())
        })
        .unwrap_or(body)
        .to_string())
}
