//! Setting lookup.
//!
//! Values resolve from the character's secrets first, then its plain
//! settings, then the process environment.

use crate::Character;
use std::{collections::BTreeMap, fmt};

/// Resolved agent settings.
#[derive(Clone, Default)]
pub struct Settings {
    secrets: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
    env: bool,
}

impl Settings {
    /// Empty settings that fall back to the environment.
    pub fn new() -> Self {
        Self {
            env: true,
            ..Default::default()
        }
    }

    /// Empty settings that never read the environment.
    pub fn isolated() -> Self {
        Self::default()
    }

    /// Settings seeded from a character, falling back to the environment.
    pub fn from_character(character: &Character) -> Self {
        Self {
            secrets: character.settings.secrets.clone(),
            values: character.settings.values.clone(),
            env: true,
        }
    }

    /// Add a secret.
    pub fn secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(key.into(), value.into());
        self
    }

    /// Add a plain value.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a setting.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.secrets.get(key).or_else(|| self.values.get(key)) {
            return Some(value.clone());
        }
        if self.env {
            return std::env::var(key).ok();
        }
        None
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("secrets", &self.secrets.keys().collect::<Vec<_>>())
            .field("values", &self.values)
            .field("env", &self.env)
            .finish()
    }
}
