//! Mancala on Starknet.
//!
//! Provides the `MOVE_GAME` action: the model reads the board from the
//! conversation and picks a pit, the proposal is checked with [`check`],
//! and a [`MoveSubmitter`] records it on the Mancala contract.

pub use {
    action::{INVALID_CONTENT_TEXT, MOVE_GAME_TEMPLATE, MoveGameAction},
    content::{InvalidContent, MoveGameContent, TransactionResult, Validation, check},
    submitter::{CONTRACT_ADDRESS, MoveSubmitter, StarknetSubmitter},
};

use mcore::Action;
use std::sync::Arc;

mod action;
mod content;
mod submitter;

/// Plugin name characters list to load these actions.
pub const NAME: &str = "starknet";

/// Name of the move action.
pub const MOVE_GAME: &str = "MOVE_GAME";

/// The plugin's actions, with shallow validation.
pub fn actions() -> Vec<Arc<dyn Action>> {
    actions_with(Validation::default())
}

/// The plugin's actions, with the given validation mode.
pub fn actions_with(validation: Validation) -> Vec<Arc<dyn Action>> {
    vec![Arc::new(MoveGameAction::new().validation(validation))]
}
