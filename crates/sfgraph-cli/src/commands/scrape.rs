use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use sfgraph_source::{RawRecord, SourceClient, normalize_all};
use sfgraph_store::ArtifactStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ScrapeResponse {
    restaurants: usize,
    path: PathBuf,
}

/// Handle `sfgraph scrape`.
///
/// An unreachable or failing source yields an empty restaurant list; only a
/// failure to save it fails the stage.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = SourceClient::new(&ctx.config.source);
    tracing::info!(url = %client.request_url(), "fetching restaurant permits");
    let records = client.fetch_or_empty().await;

    output(&save_restaurants(&ctx.store, &records)?, flags.format)
}

fn save_restaurants(store: &ArtifactStore, records: &[RawRecord]) -> anyhow::Result<ScrapeResponse> {
    let restaurants = normalize_all(records);
    let path = store
        .save_restaurants(&restaurants)
        .context("failed to save restaurants")?;
    tracing::info!(count = restaurants.len(), path = %path.display(), "saved restaurants");
    Ok(ScrapeResponse {
        restaurants: restaurants.len(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_fetch_saves_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let response = save_restaurants(&store, &[]).unwrap();
        assert_eq!(response.restaurants, 0);
        assert!(store.load_restaurants().unwrap().is_empty());
    }

    #[test]
    fn records_are_normalized_before_saving() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let records = sfgraph_source::parse_records(
            r#"[{"applicant":"Joe's Cafe","fooditems":"Pizza:Pasta","status":"APPROVED"}]"#,
        )
        .unwrap();
        save_restaurants(&store, &records).unwrap();

        let saved = store.load_restaurants().unwrap();
        assert_eq!(saved[0].business_name, "Joe's Cafe");
        assert_eq!(saved[0].address, "Unknown");
        assert_eq!(saved[0].status.as_deref(), Some("APPROVED"));
    }
}
