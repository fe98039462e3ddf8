use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use sfgraph_core::artifacts::SpaceRecord;
use sfgraph_publish::{DeployRequest, GeoClient, editor_address};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSpaceResponse {
    space_id: String,
    space_name: String,
    editor_address: String,
    path: PathBuf,
}

/// Handle `sfgraph create-space`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let key = ctx.config.wallet.require_key()?;
    let editor = editor_address(&key).context("failed to derive editor address")?;
    tracing::info!(%editor, "using editor address");

    let request = DeployRequest {
        initial_editor_address: editor.clone(),
        space_name: ctx.config.geo.space_name.clone(),
    };
    let space = GeoClient::new(ctx.config.geo.clone())
        .deploy_space(&request)
        .await
        .context("failed to create space")?;
    tracing::info!(space_id = %space.space_id, "space created");

    let record = SpaceRecord::new(space.space_id, request.space_name);
    let path = ctx
        .store
        .save_space(&record)
        .context("failed to save space id")?;

    output(
        &CreateSpaceResponse {
            space_id: record.space_id,
            space_name: record.space_name,
            editor_address: editor,
            path,
        },
        flags.format,
    )
}
