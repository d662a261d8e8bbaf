//! Character configuration.
//!
//! A [`Character`] describes *who* the agent is: persona, prompt material,
//! the plugins it loads and its settings. Action handlers live in the
//! runtime.

use crate::Content;
use anyhow::{Context, Result};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{collections::BTreeMap, path::Path};

/// An agent character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    /// Display name, also used as the author of agent messages.
    pub name: CompactString,
    /// Optional handle on chat platforms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<CompactString>,
    /// System prompt sent before each model request.
    pub system: String,
    /// Short biography lines.
    pub bio: Vec<String>,
    /// Background lore lines.
    pub lore: Vec<String>,
    /// Example conversations.
    pub message_examples: Vec<Vec<MessageExample>>,
    /// Example standalone posts.
    pub post_examples: Vec<String>,
    /// Adjectives describing the character.
    pub adjectives: Vec<String>,
    /// Topics the character knows about.
    pub topics: Vec<String>,
    /// Writing style directions.
    pub style: Style,
    /// Names of the plugins whose actions are registered.
    pub plugins: SmallVec<[CompactString; 4]>,
    /// Client surfaces the character is served on.
    pub clients: SmallVec<[CompactString; 2]>,
    /// Model provider identifier.
    pub model_provider: CompactString,
    /// Secrets and settings.
    pub settings: CharacterSettings,
}

impl Character {
    /// Create a new character with the given name.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a character from TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid character definition")
    }

    /// Load a character from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read character from {}", path.display()))?;
        let character = Self::from_toml(&content)?;
        tracing::debug!("loaded character {} from {}", character.name, path.display());
        Ok(character)
    }

    /// Set the system prompt.
    pub fn system(mut self, prompt: impl Into<String>) -> Self {
        self.system = prompt.into();
        self
    }

    /// Add a bio line.
    pub fn bio(mut self, line: impl Into<String>) -> Self {
        self.bio.push(line.into());
        self
    }

    /// Add a lore line.
    pub fn lore(mut self, line: impl Into<String>) -> Self {
        self.lore.push(line.into());
        self
    }

    /// Add an example conversation.
    pub fn message_example(mut self, example: Vec<MessageExample>) -> Self {
        self.message_examples.push(example);
        self
    }

    /// Add a plugin by name.
    pub fn plugin(mut self, name: impl Into<CompactString>) -> Self {
        self.plugins.push(name.into());
        self
    }

    /// Add a client by name.
    pub fn client(mut self, name: impl Into<CompactString>) -> Self {
        self.clients.push(name.into());
        self
    }

    /// Set the model provider.
    pub fn model_provider(mut self, provider: impl Into<CompactString>) -> Self {
        self.model_provider = provider.into();
        self
    }

    /// Add a secret setting.
    pub fn secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.secrets.insert(key.into(), value.into());
        self
    }

    /// Whether the character loads the named plugin.
    pub fn uses_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.eq_ignore_ascii_case(name))
    }
}

/// Secrets and plain settings attached to a character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSettings {
    /// Secret values, e.g. account keys.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub secrets: BTreeMap<String, String>,
    /// Non-secret values.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, String>,
    /// Model override applied to every model class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// One turn of an example conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageExample {
    /// Speaker placeholder (`{{user1}}`, `{{agent}}`) or name.
    pub user: CompactString,
    /// What was said.
    pub content: Content,
}

impl MessageExample {
    /// Create an example turn with plain text.
    pub fn new(user: impl Into<CompactString>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            content: Content::new(text),
        }
    }
}

/// Writing style directions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Applies everywhere.
    pub all: Vec<String>,
    /// Applies to chat replies.
    pub chat: Vec<String>,
    /// Applies to posts.
    pub post: Vec<String>,
}
