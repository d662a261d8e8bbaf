//! Actions and the runtime seam they run against.
//!
//! Both traits return boxed futures so they stay object-safe: the runtime
//! keeps actions as `Arc<dyn Action>` and hands itself to them as
//! `&dyn AgentRuntime`.

use crate::{Character, Content, MessageExample, ModelClass, Memory, Settings, State};
use anyhow::Result;
use futures_util::future::BoxFuture;
use serde_json::Value;

/// Receives the user-facing response of an action.
pub type Callback<'c> = dyn FnMut(Content) + Send + 'c;

/// What an action can ask of the runtime.
pub trait AgentRuntime: Send + Sync {
    /// The active character.
    fn character(&self) -> &Character;

    /// The resolved settings.
    fn settings(&self) -> &Settings;

    /// Look up a single setting.
    fn get_setting(&self, key: &str) -> Option<String> {
        self.settings().get(key)
    }

    /// Compose state for `message` from the stored history.
    fn compose_state(&self, message: &Memory) -> State;

    /// Refresh the recent messages of an existing state.
    ///
    /// Entries of the state missing from the history, like a message that
    /// was handled without being stored, stay at the end.
    fn update_recent_message_state(&self, state: State) -> State;

    /// Ask the model for a JSON object answering `context`.
    ///
    /// Resolves to `Value::Null` when the model never produced one. The
    /// value is untrusted.
    fn generate_object<'a>(
        &'a self,
        context: &'a str,
        class: ModelClass,
    ) -> BoxFuture<'a, Result<Value>>;
}

/// A named behaviour the agent can perform.
pub trait Action: Send + Sync {
    /// Canonical name.
    fn name(&self) -> &str;

    /// Alternative names.
    fn similes(&self) -> &[&str] {
        &[]
    }

    /// One-line description used for action selection.
    fn description(&self) -> &str;

    /// Example conversations that trigger the action.
    fn examples(&self) -> Vec<Vec<MessageExample>> {
        Vec::new()
    }

    /// Whether the action is eligible to run.
    fn validate<'a>(
        &'a self,
        runtime: &'a dyn AgentRuntime,
        message: &'a Memory,
    ) -> BoxFuture<'a, Result<bool>>;

    /// Run the action, returning whether it succeeded.
    ///
    /// The callback, if given, receives the user-facing response.
    fn handler<'a, 'c>(
        &'a self,
        runtime: &'a dyn AgentRuntime,
        message: &'a Memory,
        state: Option<State>,
        callback: Option<&'a mut Callback<'c>>,
    ) -> BoxFuture<'a, bool>;

    /// Whether `name` is this action's name or one of its similes.
    fn matches(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
            || self.similes().iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}
