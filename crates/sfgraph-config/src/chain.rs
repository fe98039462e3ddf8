//! Target chain configuration (Geo testnet by default).

use serde::{Deserialize, Serialize};

const fn default_chain_id() -> u64 {
    19411
}

fn default_rpc_url() -> String {
    String::from("https://rpc-geo-test-zc16z3tcvf.t.conduit.xyz/")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainConfig {
    /// EIP-155 chain id.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// JSON-RPC endpoint used to submit transactions.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            rpc_url: default_rpc_url(),
        }
    }
}
