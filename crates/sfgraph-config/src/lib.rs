//! # sfgraph-config
//!
//! Layered configuration loading for sfgraph using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Bare `PRIVATE_KEY` environment variable (mapped to `wallet.private_key`)
//! 2. Environment variables (`SFGRAPH_*` prefix, `__` as separator)
//! 3. Project-level `./sfgraph.toml`
//! 4. User-level `~/.config/sfgraph/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SFGRAPH_GEO__API_URL` -> `geo.api_url`, `SFGRAPH_CHAIN__RPC_URL`
//! -> `chain.rpc_url`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sfgraph_config::SfgraphConfig;
//!
//! let config = SfgraphConfig::load_with_dotenv().expect("config");
//! let key = config.wallet.require_key().expect("PRIVATE_KEY must be set");
//! ```

mod chain;
mod error;
mod general;
mod geo;
mod source;
mod wallet;

pub use chain::ChainConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use geo::GeoConfig;
pub use source::SourceConfig;
pub use wallet::WalletConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file.
pub const PROJECT_CONFIG_FILE: &str = "sfgraph.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SfgraphConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub geo: GeoConfig,
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SfgraphConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if present) before building
    /// the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Reject values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "source.limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        for (field, value) in [
            ("source.endpoint", &self.source.endpoint),
            ("geo.api_url", &self.geo.api_url),
            ("chain.rpc_url", &self.chain.rpc_url),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed("SFGRAPH_").split("__"));

        // Layer 4: the plain `PRIVATE_KEY` variable used by existing `.env` files
        figment.merge(Env::raw().filter_map(|key| {
            key.as_str()
                .eq_ignore_ascii_case("private_key")
                .then(|| "wallet.private_key".into())
        }))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sfgraph").join("config.toml"))
    }
}
