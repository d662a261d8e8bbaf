//! CLI argument parsing and subcommand dispatch.

use crate::config::{AppConfig, resolve_config};
use anyhow::Result;
use clap::{Parser, Subcommand};
use llm::{Client, HttpProvider, LLM};
use mcore::{AgentRuntime, Character, Content};
use plugin::Validation;
use runtime::Runtime;
use std::path::PathBuf;

pub mod character;
pub mod chat;
pub mod turn;

/// Author name of messages typed at the terminal.
pub const USER: &str = "user";

/// Mancala agent playing on Starknet.
#[derive(Parser, Debug)]
#[command(name = "mancala", about = "Mancala agent playing on Starknet")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Config file override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Character file override.
    #[arg(long, global = true)]
    pub character: Option<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Describe the game and let the agent make one move.
    Move {
        /// Messages describing the game, oldest first.
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// Read messages from stdin, moving when asked to.
    Chat,
    /// Print the active character as TOML.
    Character,
}

impl Cli {
    /// Run the parsed command.
    pub async fn run(self) -> Result<()> {
        let config = resolve_config(self.config.as_deref())?;
        let character = config.load_character(self.character.as_deref())?;
        match self.command {
            Command::Character => character::show(&character),
            Command::Move { messages } => {
                let runtime = build_runtime(&config, character)?;
                turn::run(&runtime, &messages).await
            }
            Command::Chat => {
                let runtime = build_runtime(&config, character)?;
                chat::run(&runtime).await
            }
        }
    }
}

/// Build the runtime for `character` against the configured model.
pub fn build_runtime(config: &AppConfig, character: Character) -> Result<Runtime<HttpProvider>> {
    let provider = config.model.provider(Client::new());
    let mut runtime = Runtime::new(character, provider)
        .with_models(config.model.clone())
        .with_conversation_length(config.conversation_length);
    register(&mut runtime, config.validation());
    Ok(runtime)
}

/// Register the plugin's actions if the runtime's character loads the
/// plugin.
pub fn register<P: LLM>(runtime: &mut Runtime<P>, validation: Validation) {
    let character = runtime.character();
    if !character.uses_plugin(plugin::NAME) {
        tracing::warn!(
            "{} does not load the {} plugin, no actions registered",
            character.name,
            plugin::NAME
        );
        return;
    }
    for action in plugin::actions_with(validation) {
        runtime.register_action(action);
    }
}

/// A callback printing agent replies to stdout.
pub fn printer(agent: &str) -> impl FnMut(Content) + Send + '_ {
    move |content: Content| println!("{agent}: {}", content.text)
}
