use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use sfgraph_core::ids::{IdSource, RandomIds};
use sfgraph_graph::build_operation_stream;
use sfgraph_store::ArtifactStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TransformResponse {
    restaurants: usize,
    cuisines: usize,
    triples: usize,
    relations: usize,
    operations: usize,
    path: PathBuf,
}

/// Handle `sfgraph transform`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&transform(&ctx.store, &mut RandomIds)?, flags.format)
}

fn transform(store: &ArtifactStore, ids: &mut impl IdSource) -> anyhow::Result<TransformResponse> {
    let restaurants = store
        .load_restaurants()
        .context("failed to read restaurants")?;
    tracing::info!(count = restaurants.len(), "loaded restaurants");

    let build = build_operation_stream(&restaurants, ids)
        .context("failed to build operation stream")?;
    let path = store
        .save_operations(&build.ops)
        .context("failed to save operation stream")?;
    tracing::info!(operations = build.ops.len(), path = %path.display(), "saved operation stream");

    Ok(TransformResponse {
        restaurants: build.stats.restaurants,
        cuisines: build.stats.cuisines,
        triples: build.stats.triples,
        relations: build.stats.relations,
        operations: build.ops.len(),
        path,
    })
}
