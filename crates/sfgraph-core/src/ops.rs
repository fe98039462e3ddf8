//! Triple and relation assertions, and the tagged operation stream.
//!
//! The stream is persisted as a JSON array of records discriminated by a
//! `type` tag:
//!
//! ```text
//! {"type":"SET_TRIPLE","triple":{"entity":..,"attribute":..,"value":{"type":"TEXT","value":..}}}
//! {"type":"SET_RELATION","relation":{"from":..,"relationType":..,"to":..}}
//! {"type":"CREATE_RELATION","relation":{"id":..,"fromEntity":..,"type":..,"toEntity":..,"index":..}}
//! ```
//!
//! Order is insertion order and is preserved through serialization so that
//! the published content hashes the same for the same stream.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tag values of the operation stream.
pub const SET_TRIPLE: &str = "SET_TRIPLE";
pub const SET_RELATION: &str = "SET_RELATION";
pub const CREATE_RELATION: &str = "CREATE_RELATION";

/// Value types a triple can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Text,
    Number,
}

impl ValueType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed value. Numbers are carried as their string rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypedValue {
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub value: String,
}

impl TypedValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value_type: ValueType::Text,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn number(value: impl Into<String>) -> Self {
        Self {
            value_type: ValueType::Number,
            value: value.into(),
        }
    }
}

/// One attribute value asserted on one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Triple {
    pub entity: String,
    pub attribute: String,
    pub value: TypedValue,
}

/// A relation in the short `SET_RELATION` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelationLink {
    pub from: String,
    pub relation_type: String,
    pub to: String,
}

/// A relation in the `CREATE_RELATION` form, optionally ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Entity id of the relation itself, when one was assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub from_entity: String,
    #[serde(rename = "type")]
    pub relation_type: String,
    pub to_entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

/// One record of the operation stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum Op {
    #[serde(rename = "SET_TRIPLE")]
    SetTriple { triple: Triple },
    #[serde(rename = "SET_RELATION")]
    SetRelation { relation: RelationLink },
    #[serde(rename = "CREATE_RELATION")]
    CreateRelation { relation: Relation },
}

impl Op {
    /// The `type` tag this record serializes with.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::SetTriple { .. } => SET_TRIPLE,
            Self::SetRelation { .. } => SET_RELATION,
            Self::CreateRelation { .. } => CREATE_RELATION,
        }
    }
}

impl From<Triple> for Op {
    fn from(triple: Triple) -> Self {
        Self::SetTriple { triple }
    }
}

impl From<Relation> for Op {
    fn from(relation: Relation) -> Self {
        Self::CreateRelation { relation }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn set_triple_wire_shape() {
        let op = Op::from(Triple {
            entity: "e1".into(),
            attribute: "a1".into(),
            value: TypedValue::number("37.7"),
        });
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({
                "type": "SET_TRIPLE",
                "triple": {
                    "entity": "e1",
                    "attribute": "a1",
                    "value": {"type": "NUMBER", "value": "37.7"}
                }
            })
        );
    }

    #[test]
    fn create_relation_omits_missing_optionals() {
        let op = Op::from(Relation {
            id: None,
            from_entity: "r1".into(),
            relation_type: "t".into(),
            to_entity: "c1".into(),
            index: None,
        });
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({
                "type": "CREATE_RELATION",
                "relation": {"fromEntity": "r1", "type": "t", "toEntity": "c1"}
            })
        );
    }

    #[test]
    fn set_relation_parses() {
        let op: Op = serde_json::from_value(json!({
            "type": "SET_RELATION",
            "relation": {"from": "a", "relationType": "t", "to": "b"}
        }))
        .unwrap();
        assert_eq!(op.tag(), SET_RELATION);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let parsed = serde_json::from_value::<Op>(json!({"type": "DELETE_TRIPLE", "triple": {}}));
        assert!(parsed.is_err());
    }

    #[test]
    fn stream_order_survives_serialization() {
        let ops: Vec<Op> = (0..5)
            .map(|i| {
                Op::from(Triple {
                    entity: format!("e{i}"),
                    attribute: "a".into(),
                    value: TypedValue::text(format!("v{i}")),
                })
            })
            .collect();
        let json = serde_json::to_string(&ops).unwrap();
        let back: Vec<Op> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ops);
    }
}
