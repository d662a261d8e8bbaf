//! Mancala runtime: conversation state, object generation and action
//! dispatch.
//!
//! The [`Runtime`] holds the character, the model provider, the action
//! registry and the conversation history. Actions reach it through the
//! [`AgentRuntime`] seam.
//!
//! # Example
//!
//! ```rust,ignore
//! use mancala_runtime::Runtime;
//!
//! let mut runtime = Runtime::new(character, provider);
//! runtime.register_action(action);
//! runtime.remember(Memory::text("user", "move in game 0x1"));
//! let done = runtime.process_action("MOVE_GAME", &message, None).await?;
//! ```

use anyhow::{Result, bail};
use compact_str::CompactString;
use futures_util::future::BoxFuture;
use llm::{General, LLM, Message, ModelConfig, parse_json_object};
use mcore::{
    Action, AgentRuntime, Callback, Character, Memory, ModelClass, Settings, State,
};
use parking_lot::RwLock;
use serde_json::Value;
use std::{collections::BTreeMap, sync::Arc};

/// Messages kept in composed state by default.
pub const DEFAULT_CONVERSATION_LENGTH: usize = 32;

/// Model requests made by [`AgentRuntime::generate_object`] by default.
pub const DEFAULT_OBJECT_ATTEMPTS: usize = 3;

/// The agent runtime.
pub struct Runtime<P: LLM> {
    character: Character,
    settings: Settings,
    provider: P,
    models: ModelConfig,
    actions: BTreeMap<CompactString, Arc<dyn Action>>,
    messages: RwLock<Vec<Memory>>,
    conversation_length: usize,
    object_attempts: usize,
}

impl<P: LLM> Runtime<P> {
    /// Create a runtime for `character`, with settings seeded from it.
    pub fn new(character: Character, provider: P) -> Self {
        let settings = Settings::from_character(&character);
        Self {
            character,
            settings,
            provider,
            models: ModelConfig::default(),
            actions: BTreeMap::new(),
            messages: RwLock::new(Vec::new()),
            conversation_length: DEFAULT_CONVERSATION_LENGTH,
            object_attempts: DEFAULT_OBJECT_ATTEMPTS,
        }
    }

    /// Replace the settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the model names and sampling parameters.
    pub fn with_models(mut self, models: ModelConfig) -> Self {
        self.models = models;
        self
    }

    /// Set how many messages composed state carries.
    pub fn with_conversation_length(mut self, length: usize) -> Self {
        self.conversation_length = length.max(1);
        self
    }

    /// Set how many model requests object generation may make.
    pub fn with_object_attempts(mut self, attempts: usize) -> Self {
        self.object_attempts = attempts.max(1);
        self
    }

    /// The model provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Register an action, replacing any action with the same name.
    pub fn register_action(&mut self, action: Arc<dyn Action>) {
        let name = CompactString::from(action.name());
        if self.actions.insert(name.clone(), action).is_some() {
            tracing::warn!("action {name} registered twice, keeping the latest");
        }
    }

    /// Look up an action by name or simile.
    pub fn action(&self, name: &str) -> Option<Arc<dyn Action>> {
        if let Some(action) = self.actions.get(name) {
            return Some(action.clone());
        }
        self.actions.values().find(|a| a.matches(name)).cloned()
    }

    /// The first registered action named (or aliased) by a word of `text`.
    pub fn action_in(&self, text: &str) -> Option<Arc<dyn Action>> {
        text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|word| !word.is_empty())
            .find_map(|word| self.action(word))
    }

    /// Registered actions, ordered by name.
    pub fn actions(&self) -> impl Iterator<Item = &Arc<dyn Action>> {
        self.actions.values()
    }

    /// Comma separated action names.
    pub fn action_names(&self) -> String {
        self.actions
            .keys()
            .map(CompactString::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One `NAME: description` line per registered action.
    pub fn action_descriptions(&self) -> String {
        self.actions
            .values()
            .map(|a| format!("{}: {}", a.name(), a.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Store a message in the conversation history.
    pub fn remember(&self, memory: Memory) {
        tracing::trace!("remember {}: {}", memory.user, memory.content.text);
        self.messages.write().push(memory);
    }

    /// The last `count` stored messages, oldest first.
    pub fn recent_messages(&self, count: usize) -> Vec<Memory> {
        let messages = self.messages.read();
        let start = messages.len().saturating_sub(count);
        messages[start..].to_vec()
    }

    /// Validate and run the action `name` for `message`.
    ///
    /// Returns `Ok(false)` when the action declines to run or its handler
    /// reports failure. Configuration problems found by validation are
    /// errors.
    pub async fn process_action<'c>(
        &self,
        name: &str,
        message: &Memory,
        callback: Option<&mut Callback<'c>>,
    ) -> Result<bool> {
        let Some(action) = self.action(name) else {
            bail!("action '{name}' not registered");
        };

        if !action.validate(self, message).await? {
            tracing::warn!("action {} declined message {}", action.name(), message.id);
            return Ok(false);
        }

        let state = self.compose_state(message);
        tracing::debug!("running action {}", action.name());
        Ok(action.handler(self, message, Some(state), callback).await)
    }

    /// Request configuration for `class`, honouring the character's model
    /// override.
    fn general(&self, class: ModelClass) -> General {
        let mut general = self.models.general(class);
        if let Some(model) = &self.character.settings.model {
            general.model = model.clone();
        }
        general
    }

    /// Last `conversation_length` messages, followed by the entries of
    /// `pending` that are not stored in the history.
    fn window(&self, pending: &[Memory]) -> Vec<Memory> {
        let messages = self.messages.read();
        let start = messages.len().saturating_sub(self.conversation_length);
        let mut recent = messages[start..].to_vec();
        recent.extend(
            pending
                .iter()
                .filter(|p| !messages.iter().any(|m| m.id == p.id))
                .cloned(),
        );
        drop(messages);

        let excess = recent.len().saturating_sub(self.conversation_length);
        recent.drain(..excess);
        recent
    }
}

impl<P: LLM> AgentRuntime for Runtime<P> {
    fn character(&self) -> &Character {
        &self.character
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn compose_state(&self, message: &Memory) -> State {
        let mut state = State {
            agent_name: self.character.name.clone(),
            system: self.character.system.clone(),
            bio: self.character.bio.join("\n"),
            lore: self.character.lore.join("\n"),
            action_names: self.action_names(),
            actions: self.action_descriptions(),
            ..Default::default()
        };
        state.set_recent_messages(self.window(std::slice::from_ref(message)));
        state
    }

    fn update_recent_message_state(&self, mut state: State) -> State {
        let recent = self.window(&state.recent_messages_data);
        state.set_recent_messages(recent);
        state
    }

    fn generate_object<'a>(
        &'a self,
        context: &'a str,
        class: ModelClass,
    ) -> BoxFuture<'a, Result<Value>> {
        Box::pin(async move {
            let general = self.general(class);
            let mut messages = Vec::with_capacity(2);
            if !self.character.system.is_empty() {
                messages.push(Message::system(&self.character.system));
            }
            messages.push(Message::user(context));

            for attempt in 1..=self.object_attempts {
                let response = self.provider.send(&general, &messages).await?;
                let text = response.text().unwrap_or_default();
                if let Some(object) = parse_json_object(text) {
                    return Ok(object);
                }
                tracing::warn!(
                    "attempt {attempt}/{} of {} returned no JSON object",
                    self.object_attempts,
                    general.model
                );
            }
            Ok(Value::Null)
        })
    }
}
