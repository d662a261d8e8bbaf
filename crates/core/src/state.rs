//! Prompt-facing view of a conversation.

use crate::{Memory, format_messages};
use compact_str::CompactString;
use std::collections::BTreeMap;

/// Composed conversation state.
///
/// Built by the runtime per request and rendered into templates through
/// [`compose_context`](crate::compose_context).
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The character's name.
    pub agent_name: CompactString,
    /// The character's system prompt.
    pub system: String,
    /// Biography, one line per entry.
    pub bio: String,
    /// Lore, one line per entry.
    pub lore: String,
    /// Recent messages rendered as text.
    pub recent_messages: String,
    /// Recent messages, oldest first.
    pub recent_messages_data: Vec<Memory>,
    /// Comma separated names of registered actions.
    pub action_names: String,
    /// Registered actions with their descriptions.
    pub actions: String,
    /// Extra template values.
    pub values: BTreeMap<String, String>,
}

impl State {
    /// Resolve a template key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "agentName" => self.agent_name.as_str(),
            "system" => &self.system,
            "bio" => &self.bio,
            "lore" => &self.lore,
            "recentMessages" => &self.recent_messages,
            "actionNames" => &self.action_names,
            "actions" => &self.actions,
            _ => return self.values.get(key).map(String::as_str),
        };
        Some(value)
    }

    /// Set an extra template value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Replace the recent messages.
    pub fn set_recent_messages(&mut self, messages: Vec<Memory>) {
        self.recent_messages = format_messages(&messages);
        self.recent_messages_data = messages;
    }
}
