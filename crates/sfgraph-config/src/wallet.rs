//! Signing key configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Clone, Default, Deserialize, Serialize)]
pub struct WalletConfig {
    /// Hex-encoded secp256k1 private key, with or without `0x`.
    #[serde(default)]
    pub private_key: String,
}

impl WalletConfig {
    pub fn is_configured(&self) -> bool {
        !self.private_key.trim().is_empty()
    }

    /// The private key normalized to a `0x`-prefixed hex string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if no key is set.
    pub fn require_key(&self) -> Result<String, ConfigError> {
        let key = self.private_key.trim();
        if key.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "wallet".into(),
            });
        }
        let hex = key.strip_prefix("0x").unwrap_or(key);
        Ok(format!("0x{hex}"))
    }
}

impl fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.is_configured() { "<redacted>" } else { "<unset>" };
        f.debug_struct("WalletConfig")
            .field("private_key", &shown)
            .finish()
    }
}
