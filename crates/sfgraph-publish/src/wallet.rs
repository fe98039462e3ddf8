//! Editor identity and transaction submission.

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use async_trait::async_trait;
use sfgraph_config::ChainConfig;

use crate::calldata::Calldata;
use crate::error::PublishError;

/// Gas limit for edit transactions.
pub const GAS_LIMIT: u64 = 13_000_000;

/// Max fee and max priority fee per gas: 0.01 gwei.
pub const FEE_PER_GAS_WEI: u128 = 10_000_000;

/// Parse a hex private key (with or without `0x`).
///
/// # Errors
///
/// Returns [`PublishError::InvalidKey`] if the key is not 32 bytes of hex.
pub fn signer_from_key(private_key: &str) -> Result<PrivateKeySigner, PublishError> {
    let key = private_key.trim();
    let key = key.strip_prefix("0x").unwrap_or(key);
    key.parse::<PrivateKeySigner>()
        .map_err(|e| PublishError::InvalidKey(e.to_string()))
}

/// EIP-55 checksummed address controlled by `private_key`.
///
/// # Errors
///
/// Returns [`PublishError::InvalidKey`] if the key does not parse.
pub fn editor_address(private_key: &str) -> Result<String, PublishError> {
    Ok(signer_from_key(private_key)?.address().to_checksum(None))
}

/// Signs and broadcasts edit transactions.
#[async_trait]
pub trait TransactionSender: Send + Sync {
    /// Submit a transaction calling `calldata.to` with `calldata.data` and
    /// return its hash.
    async fn send(&self, calldata: &Calldata) -> Result<String, PublishError>;
}

/// [`TransactionSender`] backed by an alloy HTTP provider with a local signer.
pub struct AlloySender {
    signer: PrivateKeySigner,
    chain: ChainConfig,
}

impl AlloySender {
    /// # Errors
    ///
    /// Returns [`PublishError::InvalidKey`] if the key does not parse.
    pub fn new(private_key: &str, chain: ChainConfig) -> Result<Self, PublishError> {
        Ok(Self {
            signer: signer_from_key(private_key)?,
            chain,
        })
    }
}

/// EIP-1559 transaction for `calldata` with the fixed gas settings.
///
/// # Errors
///
/// Returns [`PublishError::Transaction`] if `to` is not an address or `data`
/// is not hex.
pub fn edit_transaction(
    calldata: &Calldata,
    chain_id: u64,
) -> Result<TransactionRequest, PublishError> {
    let to: Address = calldata.to.parse().map_err(|e| {
        PublishError::Transaction(format!("invalid contract address '{}': {e}", calldata.to))
    })?;
    let input: Bytes = calldata
        .hex_data()
        .parse()
        .map_err(|e| PublishError::Transaction(format!("invalid calldata: {e}")))?;

    Ok(TransactionRequest::default()
        .with_to(to)
        .with_input(input)
        .with_gas_limit(GAS_LIMIT)
        .with_max_fee_per_gas(FEE_PER_GAS_WEI)
        .with_max_priority_fee_per_gas(FEE_PER_GAS_WEI)
        .with_value(U256::ZERO)
        .with_chain_id(chain_id))
}

#[async_trait]
impl TransactionSender for AlloySender {
    async fn send(&self, calldata: &Calldata) -> Result<String, PublishError> {
        let tx = edit_transaction(calldata, self.chain.chain_id)?;
        let rpc_url: Url = self.chain.rpc_url.parse().map_err(|e| {
            PublishError::Wallet(format!("invalid RPC URL '{}': {e}", self.chain.rpc_url))
        })?;
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(self.signer.clone()))
            .connect_http(rpc_url);

        tracing::info!(
            from = %self.signer.address(),
            to = %calldata.to,
            chain_id = self.chain.chain_id,
            "sending transaction"
        );
        let pending = provider
            .send_transaction(tx)
            .await
            .map_err(|e| PublishError::Transaction(e.to_string()))?;
        let hash = pending.tx_hash().to_string();
        tracing::info!(%hash, "transaction submitted");
        Ok(hash)
    }
}
