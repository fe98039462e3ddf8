use anyhow::Context;
use serde::Serialize;
use sfgraph_publish::{AlloySender, GeoClient, TransactionSender};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    space_id: String,
    cid: String,
    contract: String,
    transaction_hash: String,
}

/// Handle `sfgraph submit`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let content = ctx
        .store
        .load_content_hash()
        .context("failed to read content hash")?;
    content.validate()?;
    let space = ctx.store.load_space().context("failed to read space id")?;
    space.validate()?;
    tracing::info!(cid = %content.hash, space_id = %space.space_id, "submitting edit");

    let key = ctx.config.wallet.require_key()?;
    let sender = AlloySender::new(&key, ctx.config.chain.clone())
        .context("failed to set up wallet")?;

    let calldata = GeoClient::new(ctx.config.geo.clone())
        .edit_calldata(&space.space_id, &content.hash)
        .await
        .context("failed to fetch edit calldata")?;
    let transaction_hash = sender
        .send(&calldata)
        .await
        .context("failed to submit transaction")?;

    output(
        &SubmitResponse {
            space_id: space.space_id,
            cid: content.hash,
            contract: calldata.to,
            transaction_hash,
        },
        flags.format,
    )
}
