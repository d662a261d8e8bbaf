//! Submitting moves to the Mancala contract.

use chain::{ChainError, ConnectedAccount, Contract, Felt, account, validate_starknet_config};
use futures_util::future::BoxFuture;
use mcore::Settings;
use serde_json::{Number, Value};

/// Address of the deployed Mancala contract.
pub const CONTRACT_ADDRESS: &str =
    "0x073d5f249b9519777bcca407e74b7230c935abded8b1f21717f75a5a8ce962a5";

/// Records a move on chain.
pub trait MoveSubmitter: Send + Sync {
    /// Submit `move(game_id, selected_pit)` and return the transaction hash.
    ///
    /// Each call is a separate transaction; nothing is deduplicated.
    fn submit<'a>(
        &'a self,
        settings: &'a Settings,
        game_id: &'a str,
        selected_pit: &'a Number,
    ) -> BoxFuture<'a, Result<String, ChainError>>;
}

/// Submits moves through a single-owner Starknet account.
///
/// Credentials are read from the settings on every call and the contract
/// ABI is fetched from the network each time.
#[derive(Debug, Clone)]
pub struct StarknetSubmitter {
    contract: Felt,
}

impl StarknetSubmitter {
    /// Submit to a contract other than [`CONTRACT_ADDRESS`].
    pub fn with_contract(contract: Felt) -> Self {
        Self { contract }
    }

    /// The target contract.
    pub fn contract(&self) -> Felt {
        self.contract
    }
}

impl Default for StarknetSubmitter {
    fn default() -> Self {
        Self {
            contract: Felt::from_hex_unchecked(CONTRACT_ADDRESS),
        }
    }
}

impl MoveSubmitter for StarknetSubmitter {
    fn submit<'a>(
        &'a self,
        settings: &'a Settings,
        game_id: &'a str,
        selected_pit: &'a Number,
    ) -> BoxFuture<'a, Result<String, ChainError>> {
        Box::pin(async move {
            let config = validate_starknet_config(settings)?;
            let account = account(&config).await?;
            let contract = Contract::fetch(account.provider(), self.contract).await?;

            let args = [
                Value::String(game_id.to_owned()),
                Value::Number(selected_pit.clone()),
            ];
            let hash = contract.connect(&account).invoke("move", &args).await?;
            Ok(hash.to_hex_string())
        })
    }
}
