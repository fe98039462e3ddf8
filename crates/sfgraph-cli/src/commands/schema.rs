use schemars::schema_for;
use sfgraph_core::artifacts::{ContentHashRecord, SpaceRecord};
use sfgraph_core::entities::Restaurant;
use sfgraph_core::ops::Op;

use crate::cli::{GlobalFlags, SchemaArgs, SchemaArtifact};
use crate::output::output;

/// Handle `sfgraph schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&artifact_schema(args.artifact)?, flags.format)
}

fn artifact_schema(artifact: SchemaArtifact) -> anyhow::Result<serde_json::Value> {
    let schema = match artifact {
        SchemaArtifact::Restaurants => schema_for!(Vec<Restaurant>),
        SchemaArtifact::Operations => schema_for!(Vec<Op>),
        SchemaArtifact::ContentHash => schema_for!(ContentHashRecord),
        SchemaArtifact::Space => schema_for!(SpaceRecord),
    };
    Ok(serde_json::to_value(schema)?)
}
