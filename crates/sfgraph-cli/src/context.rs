use sfgraph_config::SfgraphConfig;
use sfgraph_store::ArtifactStore;

use crate::cli::GlobalFlags;

/// Shared state for stage handlers.
pub struct AppContext {
    pub config: SfgraphConfig,
    pub store: ArtifactStore,
}

impl AppContext {
    /// `--data-dir` wins over `general.data_dir`.
    pub fn new(config: SfgraphConfig, flags: &GlobalFlags) -> Self {
        let data_dir = flags
            .data_dir
            .clone()
            .unwrap_or_else(|| config.general.data_dir.clone());
        tracing::debug!(data_dir = %data_dir.display(), "using data directory");
        Self {
            store: ArtifactStore::new(data_dir),
            config,
        }
    }
}
