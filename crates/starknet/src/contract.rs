//! Contract clients.
//!
//! A [`Contract`] is an address plus the interface fetched for it. Binding
//! it to an account yields a [`BoundContract`] that can submit
//! invocations.

use crate::{Abi, ChainError};
use serde_json::Value;
use starknet::{
    accounts::{Account, ConnectedAccount},
    core::{
        types::{BlockId, BlockTag, Call, Felt},
        utils::get_selector_from_name,
    },
    providers::Provider,
};

/// A deployed contract and its interface.
#[derive(Debug, Clone)]
pub struct Contract {
    address: Felt,
    abi: Abi,
}

impl Contract {
    /// Create a contract from a known interface.
    pub fn new(address: Felt, abi: Abi) -> Self {
        Self { address, abi }
    }

    /// Fetch the interface of the contract deployed at `address`.
    pub async fn fetch<P>(provider: &P, address: Felt) -> Result<Self, ChainError>
    where
        P: Provider + Sync,
    {
        let class = provider
            .get_class_at(BlockId::Tag(BlockTag::Latest), address)
            .await?;
        let abi = Abi::from_class(&class)?;
        if abi.is_empty() {
            return Err(ChainError::Interface("Contract ABI not found".into()));
        }
        Ok(Self { address, abi })
    }

    /// The contract address.
    pub fn address(&self) -> Felt {
        self.address
    }

    /// The contract interface.
    pub fn abi(&self) -> &Abi {
        &self.abi
    }

    /// Build the call for `function` with positional `args`.
    pub fn call(&self, function: &str, args: &[Value]) -> Result<Call, ChainError> {
        let entry = self.abi.function(function).ok_or_else(|| {
            ChainError::Interface(format!("Contract has no function named {function}"))
        })?;
        if entry.state_mutability.as_deref() == Some("view") {
            tracing::warn!("invoking view function {function}");
        }

        let selector = get_selector_from_name(function)
            .map_err(|e| ChainError::Encode(format!("invalid function name {function}: {e}")))?;
        Ok(Call {
            to: self.address,
            selector,
            calldata: entry.encode(args)?,
        })
    }

    /// Bind the contract to a signing account.
    pub fn connect<'a, A>(&'a self, account: &'a A) -> BoundContract<'a, A>
    where
        A: ConnectedAccount + Sync,
    {
        BoundContract {
            contract: self,
            account,
        }
    }
}

/// A contract bound to the account that signs its invocations.
pub struct BoundContract<'a, A> {
    contract: &'a Contract,
    account: &'a A,
}

impl<A> BoundContract<'_, A>
where
    A: ConnectedAccount + Sync,
{
    /// Submit one invocation and return its transaction hash.
    ///
    /// Does not wait for the transaction to be accepted.
    pub async fn invoke(&self, function: &str, args: &[Value]) -> Result<Felt, ChainError> {
        let call = self.contract.call(function, args)?;
        let result = self
            .account
            .execute_v3(vec![call])
            .send()
            .await
            .map_err(|e| ChainError::Submission(e.to_string()))?;
        Ok(result.transaction_hash)
    }
}
