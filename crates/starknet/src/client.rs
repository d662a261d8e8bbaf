//! Provider and account construction.

use crate::{ChainError, StarknetConfig};
use starknet::{
    accounts::{ExecutionEncoding, SingleOwnerAccount},
    providers::{
        Provider,
        jsonrpc::{HttpTransport, JsonRpcClient},
    },
    signers::{LocalWallet, SigningKey},
};

/// JSON-RPC provider over HTTP.
pub type StarknetProvider = JsonRpcClient<HttpTransport>;

/// Account signing with a local private key.
pub type StarknetAccount = SingleOwnerAccount<StarknetProvider, LocalWallet>;

/// Build a provider for the configured endpoint.
pub fn provider(config: &StarknetConfig) -> StarknetProvider {
    JsonRpcClient::new(HttpTransport::new(config.provider_url.clone()))
}

/// Build the signing account, querying the chain id from the network.
pub async fn account(config: &StarknetConfig) -> Result<StarknetAccount, ChainError> {
    let provider = provider(config);
    let chain_id = provider.chain_id().await?;
    tracing::debug!(
        "connected to chain {} as {}",
        chain_id.to_hex_string(),
        config.account_address.to_hex_string()
    );

    let signer = LocalWallet::from(SigningKey::from_secret_scalar(config.private_key));
    Ok(SingleOwnerAccount::new(
        provider,
        signer,
        config.account_address,
        chain_id,
        ExecutionEncoding::New,
    ))
}
