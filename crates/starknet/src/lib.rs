//! Starknet access layer.
//!
//! Resolves account credentials from agent settings, builds a JSON-RPC
//! provider and a single-owner account, fetches a deployed contract's ABI
//! and submits ABI-encoded invocations.

pub use {
    abi::{Abi, Function, Param},
    client::{StarknetAccount, StarknetProvider, account, provider},
    config::{
        ACCOUNT_ADDRESS, PRIVATE_KEY, PROVIDER_URL, StarknetConfig, validate_starknet_config,
    },
    contract::{BoundContract, Contract},
    error::ChainError,
    starknet::{accounts::ConnectedAccount, core::types::Felt},
};

mod abi;
mod client;
mod config;
mod contract;
mod error;
