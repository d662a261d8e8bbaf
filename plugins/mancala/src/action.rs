//! The `MOVE_GAME` action.

use crate::{
    MoveGameContent, MoveSubmitter, StarknetSubmitter, TransactionResult, Validation, check,
};
use anyhow::Result;
use futures_util::future::BoxFuture;
use mcore::{
    Action, AgentRuntime, Callback, Content, Memory, MessageExample, ModelClass, State,
    compose_context,
};
use serde_json::{Value, json};

/// Prompt asking the model for the game state and its pit choice.
pub const MOVE_GAME_TEMPLATE: &str = include_str!("../prompts/move_game.md");

/// Reply sent when the model output is not a usable move.
pub const INVALID_CONTENT_TEXT: &str = "Could not determine game state or select a valid move. \
Please provide game ID and current board state.";

/// Plays one Mancala move: extracts it from the conversation with the
/// model, checks it and submits it to the contract.
pub struct MoveGameAction<S = StarknetSubmitter> {
    submitter: S,
    validation: Validation,
}

impl MoveGameAction {
    /// Submit through Starknet with shallow validation.
    pub fn new() -> Self {
        Self::with_submitter(StarknetSubmitter::default())
    }
}

impl Default for MoveGameAction {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSubmitter> MoveGameAction<S> {
    /// Submit through `submitter` with shallow validation.
    pub fn with_submitter(submitter: S) -> Self {
        Self {
            submitter,
            validation: Validation::default(),
        }
    }

    /// Set the validation mode.
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// The submitter.
    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    async fn extract(&self, runtime: &dyn AgentRuntime, state: State) -> Value {
        let context = compose_context(&state, MOVE_GAME_TEMPLATE);
        match runtime.generate_object(&context, ModelClass::Medium).await {
            Ok(candidate) => candidate,
            Err(e) => {
                tracing::error!("failed to generate move content: {e:#}");
                Value::Null
            }
        }
    }
}

impl<S: MoveSubmitter> Action for MoveGameAction<S> {
    fn name(&self) -> &str {
        crate::MOVE_GAME
    }

    fn similes(&self) -> &[&str] {
        &["MAKE_MOVE", "PLAY_MOVE", "SELECT_PIT"]
    }

    fn description(&self) -> &str {
        "Use this action when it's your turn to make a move in a Mancala game."
    }

    fn examples(&self) -> Vec<Vec<MessageExample>> {
        vec![vec![
            MessageExample::new(
                "{{user1}}",
                "It's your turn in game 0x123. Opponent's pits are [4,4,4,4,4,4] with 10 in mancala",
            ),
            MessageExample::new(
                "{{agent}}",
                "I'll analyze the position and make a strategic move from pit 3.",
            ),
        ]]
    }

    fn validate<'a>(
        &'a self,
        runtime: &'a dyn AgentRuntime,
        _message: &'a Memory,
    ) -> BoxFuture<'a, Result<bool>> {
        Box::pin(async move {
            chain::validate_starknet_config(runtime.settings())?;
            Ok(true)
        })
    }

    fn handler<'a, 'c>(
        &'a self,
        runtime: &'a dyn AgentRuntime,
        message: &'a Memory,
        state: Option<State>,
        callback: Option<&'a mut Callback<'c>>,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            tracing::info!("starting MOVE_GAME handler");
            let state = match state {
                Some(state) => runtime.update_recent_message_state(state),
                None => runtime.compose_state(message),
            };

            let candidate = self.extract(runtime, state).await;
            tracing::debug!("move game content: {candidate}");

            let content = match check(&candidate, self.validation) {
                Ok(content) => content,
                Err(e) => {
                    tracing::error!("invalid content for MOVE_GAME action: {e}");
                    respond(callback, invalid());
                    return false;
                }
            };

            match self.submit(runtime, &content).await {
                Ok(result) => {
                    tracing::info!(
                        "made move on pit {} in game {}, tx: {}",
                        result.selected_pit,
                        result.game_id,
                        result.tx_hash
                    );
                    let text = format!(
                        "I've selected pit {} for my move. Transaction hash: {}",
                        result.selected_pit, result.tx_hash
                    );
                    respond(callback, Content::new(text).with_content(json!(result)));
                    true
                }
                Err(error) => {
                    tracing::error!("error making move: {error}");
                    respond(
                        callback,
                        Content::new(format!("Error making move: {error}"))
                            .with_content(json!({ "error": error })),
                    );
                    false
                }
            }
        })
    }
}

impl<S: MoveSubmitter> MoveGameAction<S> {
    async fn submit(
        &self,
        runtime: &dyn AgentRuntime,
        content: &MoveGameContent,
    ) -> Result<TransactionResult, String> {
        self.submitter
            .submit(runtime.settings(), &content.game_id, &content.selected_pit)
            .await
            .map(|hash| TransactionResult::new(hash, content))
            .map_err(|e| e.to_string())
    }
}

fn invalid() -> Content {
    Content::new(INVALID_CONTENT_TEXT).with_content(json!({ "error": "Invalid move content" }))
}

fn respond(callback: Option<&mut Callback<'_>>, content: Content) {
    if let Some(callback) = callback {
        callback(content);
    }
}
