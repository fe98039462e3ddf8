//! Conversion of the persisted operation stream into edit operations.
//!
//! Edit operations use the knowledge-graph SDK layout: triples are kept
//! as they are, and both relation forms of the stream become a single
//! `CREATE_RELATION` that always carries its own entity id.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sfgraph_core::CoreError;
use sfgraph_core::ids::IdSource;
use sfgraph_core::ops::{CREATE_RELATION, Op, SET_RELATION, SET_TRIPLE, Triple};

/// A relation as uploaded: the id is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRelation {
    pub id: String,
    #[serde(rename = "type")]
    pub relation_type: String,
    pub from_entity: String,
    pub to_entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

/// One operation of an uploaded edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EditOp {
    #[serde(rename = "SET_TRIPLE")]
    SetTriple { triple: Triple },
    #[serde(rename = "CREATE_RELATION")]
    CreateRelation { relation: EditRelation },
}

/// A named, authored batch of operations uploaded as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub name: String,
    pub author: String,
    pub ops: Vec<EditOp>,
}

/// Result of [`convert_operations`].
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub ops: Vec<EditOp>,
    /// Records read from the stream.
    pub total: usize,
    /// Records skipped for an unknown tag or a payload that did not decode.
    pub dropped: usize,
}

impl Conversion {
    #[must_use]
    pub const fn converted(&self) -> usize {
        self.ops.len()
    }
}

/// Convert raw operation-stream records into edit operations.
///
/// Records with a missing or unrecognised `type` are logged and skipped;
/// records with a known tag but an undecodable payload are logged as errors
/// and skipped. Neither aborts the conversion.
///
/// # Errors
///
/// Propagates [`CoreError`] from the identifier source when a relation
/// without an id needs one.
pub fn convert_operations(
    records: &[Value],
    ids: &mut impl IdSource,
) -> Result<Conversion, CoreError> {
    tracing::info!(records = records.len(), "converting operation stream");
    let mut conversion = Conversion {
        total: records.len(),
        ..Conversion::default()
    };

    for (position, record) in records.iter().enumerate() {
        let tag = record.get("type").and_then(Value::as_str);
        if !matches!(tag, Some(SET_TRIPLE | SET_RELATION | CREATE_RELATION)) {
            tracing::warn!(position, tag = ?tag, "unknown operation type; skipping");
            conversion.dropped += 1;
            continue;
        }

        let op = match Op::deserialize(record) {
            Ok(op) => op,
            Err(error) => {
                tracing::error!(position, %error, %record, "malformed operation; skipping");
                conversion.dropped += 1;
                continue;
            }
        };
        conversion.ops.push(to_edit_op(op, ids)?);
    }

    tracing::info!(
        converted = conversion.converted(),
        dropped = conversion.dropped,
        "converted operations"
    );
    Ok(conversion)
}

fn to_edit_op(op: Op, ids: &mut impl IdSource) -> Result<EditOp, CoreError> {
    Ok(match op {
        Op::SetTriple { triple } => EditOp::SetTriple { triple },
        Op::SetRelation { relation } => EditOp::CreateRelation {
            relation: EditRelation {
                id: ids.next_id()?,
                relation_type: relation.relation_type,
                from_entity: relation.from,
                to_entity: relation.to,
                index: None,
            },
        },
        Op::CreateRelation { relation } => EditOp::CreateRelation {
            relation: EditRelation {
                id: match relation.id {
                    Some(id) => id,
                    None => ids.next_id()?,
                },
                relation_type: relation.relation_type,
                from_entity: relation.from_entity,
                to_entity: relation.to_entity,
                index: relation.index.filter(|index| !index.is_empty()),
            },
        },
    })
}
