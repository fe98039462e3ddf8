//! Raw rows as returned by the open-data API.
//!
//! Every field is optional: the dataset is inconsistently populated and the
//! normalizer decides what an absent value becomes. A field of the wrong
//! JSON type decodes as absent. Unknown columns are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sfgraph_core::numeric::Coordinate;

use crate::error::SourceError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawLocation {
    #[serde(default, deserialize_with = "lenient")]
    pub latitude: Option<Coordinate>,
    #[serde(default, deserialize_with = "lenient")]
    pub longitude: Option<Coordinate>,
}

/// One permit row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub applicant: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<RawLocation>,
    #[serde(default, deserialize_with = "lenient")]
    pub fooditems: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub zipcode: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub neighborhoods: Option<Vec<String>>,
}

/// Decode a field as `T`, or `None` when it is null or of another JSON type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a response body into records.
///
/// The body must be a JSON array. Rows that are not JSON objects are
/// skipped with a warning instead of failing the batch.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] if the body is not a JSON array.
pub fn parse_records(body: &str) -> Result<Vec<RawRecord>, SourceError> {
    let rows: Vec<Value> =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;

    let total = rows.len();
    let records: Vec<RawRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(row, value)| {
            if !value.is_object() {
                tracing::warn!(row, %value, "skipping non-object source row");
                return None;
            }
            match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::warn!(row, %error, "skipping malformed source row");
                    None
                }
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            skipped = total - records.len(),
            total,
            "some source rows could not be decoded"
        );
    }
    Ok(records)
}
