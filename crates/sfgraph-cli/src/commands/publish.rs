use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use sfgraph_config::GeoConfig;
use sfgraph_core::artifacts::ContentHashRecord;
use sfgraph_core::ids::RandomIds;
use sfgraph_publish::{ContentStore, GeoClient, publish_operations};
use sfgraph_store::ArtifactStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PublishResponse {
    cid: String,
    total: usize,
    converted: usize,
    dropped: usize,
    path: PathBuf,
}

/// Handle `sfgraph publish`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = GeoClient::new(ctx.config.geo.clone());
    output(&publish(&ctx.store, &client, &ctx.config.geo).await?, flags.format)
}

async fn publish<S: ContentStore>(
    store: &ArtifactStore,
    content_store: &S,
    geo: &GeoConfig,
) -> anyhow::Result<PublishResponse> {
    let records = store
        .load_operation_records()
        .context("failed to read operation stream")?;
    tracing::info!(records = records.len(), "publishing operation stream");

    let published = publish_operations(
        content_store,
        &geo.edit_name,
        &geo.edit_author,
        &records,
        &mut RandomIds,
    )
    .await
    .context("failed to publish edit")?;

    let record = ContentHashRecord::now(&published.cid);
    record
        .validate()
        .context("content store returned no usable content id")?;
    let path = store
        .save_content_hash(&record)
        .context("failed to save content hash")?;
    tracing::info!(cid = %published.cid, path = %path.display(), "saved content hash");

    Ok(PublishResponse {
        cid: published.cid,
        total: published.total,
        converted: published.converted,
        dropped: published.dropped,
        path,
    })
}
