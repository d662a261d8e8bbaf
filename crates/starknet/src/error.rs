//! Errors raised while talking to Starknet.

use starknet::providers::ProviderError;

/// A failure anywhere on the path from settings to a submitted transaction.
///
/// The `Display` output is the raw message shown to users.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// Required settings are missing or malformed.
    #[error("Starknet configuration error: {0}")]
    Config(String),

    /// The contract interface could not be resolved.
    #[error("{0}")]
    Interface(String),

    /// Arguments do not fit the contract interface.
    #[error("{0}")]
    Encode(String),

    /// Signing or submitting the transaction failed.
    #[error("{0}")]
    Submission(String),

    /// The JSON-RPC provider failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
