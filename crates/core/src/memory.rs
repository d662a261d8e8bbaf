//! Conversation entries.

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ulid::Ulid;

/// The payload of a message: display text plus optional structured data.
///
/// This is also what action handlers hand to their callback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Human-readable text.
    #[serde(default)]
    pub text: String,

    /// Action the author asked for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<CompactString>,

    /// Structured payload.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub content: Value,
}

impl Content {
    /// Create content with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Attach a structured payload.
    pub fn with_content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    /// Name the action this content asks for.
    pub fn with_action(mut self, action: impl Into<CompactString>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// A single stored conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    /// Unique id.
    pub id: Ulid,
    /// Author name.
    pub user: CompactString,
    /// What was said.
    pub content: Content,
    /// When it was said.
    pub created_at: DateTime<Utc>,
}

impl Memory {
    /// Create a new memory authored by `user`.
    pub fn new(user: impl Into<CompactString>, content: Content) -> Self {
        Self {
            id: Ulid::new(),
            user: user.into(),
            content,
            created_at: Utc::now(),
        }
    }

    /// Create a plain-text memory.
    pub fn text(user: impl Into<CompactString>, text: impl Into<String>) -> Self {
        Self::new(user, Content::new(text))
    }
}
