use anyhow::Context;
use sfgraph_config::SfgraphConfig;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<SfgraphConfig> {
    let config =
        SfgraphConfig::load_with_dotenv().context("failed to load sfgraph configuration")?;
    config.validate()?;
    if !config.wallet.is_configured() {
        tracing::debug!("no private key configured; create-space and submit will fail");
    }
    Ok(config)
}
