//! Mancala agent CLI: resolves config and character, builds the runtime and
//! plays moves on Starknet.

pub use cmd::{Cli, Command};

pub mod character;
pub mod cmd;
pub mod config;
