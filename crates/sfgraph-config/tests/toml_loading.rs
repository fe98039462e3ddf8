//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sfgraph_config::SfgraphConfig;
use std::path::PathBuf;

#[test]
fn loads_source_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[source]
endpoint = "http://localhost:9000/resource.json"
limit = 10
status = "REQUESTED"
"#,
        )?;

        let config: SfgraphConfig = Figment::from(Serialized::defaults(SfgraphConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.source.endpoint, "http://localhost:9000/resource.json");
        assert_eq!(config.source.limit, 10);
        assert_eq!(config.source.where_clause(), "status='REQUESTED'");
        Ok(())
    });
}

#[test]
fn loads_geo_and_chain_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[geo]
api_url = "https://api.example.test"
network = "MAINNET"
space_name = "Oakland Restaurants"

[chain]
chain_id = 80451
rpc_url = "https://rpc.example.test"
"#,
        )?;

        let config: SfgraphConfig = Figment::from(Serialized::defaults(SfgraphConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.geo.network, "MAINNET");
        assert_eq!(config.geo.space_name, "Oakland Restaurants");
        assert_eq!(config.geo.deploy_url(), "https://api.example.test/deploy");
        // Untouched fields keep their defaults.
        assert_eq!(config.geo.edit_name, "San Francisco Restaurants Data");
        assert_eq!(config.chain.chain_id, 80451);
        assert_eq!(config.chain.rpc_url, "https://rpc.example.test");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "sfgraph.toml",
            r#"
[general]
data_dir = "artifacts"

[wallet]
private_key = "0x01"
"#,
        )?;

        let config = SfgraphConfig::load().expect("config loads");
        assert_eq!(config.general.data_dir, PathBuf::from("artifacts"));
        assert!(config.wallet.is_configured());
        Ok(())
    });
}

#[test]
fn malformed_toml_is_an_error() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("sfgraph.toml", "[source\nlimit = ")?;
        assert!(SfgraphConfig::load().is_err());
        Ok(())
    });
}
