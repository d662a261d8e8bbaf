//! Account configuration resolved from agent settings.

use crate::ChainError;
use mcore::Settings;
use starknet::{core::types::Felt, providers::Url};
use std::fmt;

/// Setting key for the account contract address.
pub const ACCOUNT_ADDRESS: &str = "STARKNET_ACCOUNT_ADDRESS";

/// Setting key for the account private key.
pub const PRIVATE_KEY: &str = "STARKNET_PRIVATE_KEY";

/// Setting key for the JSON-RPC endpoint.
pub const PROVIDER_URL: &str = "STARKNET_PROVIDER_URL";

/// Validated Starknet credentials.
#[derive(Clone)]
pub struct StarknetConfig {
    /// Account contract address.
    pub account_address: Felt,
    /// Signing key.
    pub private_key: Felt,
    /// JSON-RPC endpoint.
    pub provider_url: Url,
}

impl fmt::Debug for StarknetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarknetConfig")
            .field("account_address", &self.account_address.to_hex_string())
            .field("private_key", &"<redacted>")
            .field("provider_url", &self.provider_url.as_str())
            .finish()
    }
}

/// Read and check the Starknet settings.
///
/// Every key must be present and non-empty, the address and key must be
/// field elements, and the endpoint an absolute http(s) URL.
pub fn validate_starknet_config(settings: &Settings) -> Result<StarknetConfig, ChainError> {
    let account_address = felt(ACCOUNT_ADDRESS, &required(settings, ACCOUNT_ADDRESS)?)?;
    let private_key = felt(PRIVATE_KEY, &required(settings, PRIVATE_KEY)?)?;

    let raw_url = required(settings, PROVIDER_URL)?;
    let provider_url = Url::parse(&raw_url)
        .map_err(|e| ChainError::Config(format!("{PROVIDER_URL} is not a valid URL: {e}")))?;
    if !matches!(provider_url.scheme(), "http" | "https") {
        return Err(ChainError::Config(format!(
            "{PROVIDER_URL} must be an http(s) URL"
        )));
    }

    Ok(StarknetConfig {
        account_address,
        private_key,
        provider_url,
    })
}

fn required(settings: &Settings, key: &str) -> Result<String, ChainError> {
    settings
        .get(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ChainError::Config(format!("{key} is required")))
}

fn felt(key: &str, value: &str) -> Result<Felt, ChainError> {
    Felt::from_hex(value)
        .map_err(|_| ChainError::Config(format!("{key} is not a valid hex field element")))
}
