//! Configuration resolution for the agent.
//!
//! Resolves config.toml in priority order:
//! 1. `--config <path>` flag (explicit override)
//! 2. `{cwd}/.mancala/config.toml` (workspace config)
//! 3. `~/.config/mancala/config.toml` (global default)
//!
//! If the global default doesn't exist, it is generated automatically.

use crate::character::eliza;
use anyhow::{Context, Result};
use llm::ModelConfig;
use mcore::Character;
use plugin::Validation;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config template generated when no config exists.
const DEFAULT_CONFIG: &str = r#"# Messages kept in the prompt.
conversation_length = 32

# Also reject pits outside 1-6 and negative seed counts.
strict = false

# Character file; the built-in Eliza is used when unset.
# character = "eliza.toml"

[model]
endpoint = "https://api.openai.com/v1/chat/completions"
api_key = "${OPENAI_API_KEY}"
small = "gpt-4o-mini"
medium = "gpt-4o"
large = "gpt-4o"
temperature = 0.7
max_tokens = 1024
"#;

/// Agent configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model endpoint and names.
    pub model: ModelConfig,
    /// Character file, relative to the working directory.
    pub character: Option<PathBuf>,
    /// Messages kept in composed state.
    pub conversation_length: usize,
    /// Use strict move validation.
    pub strict: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            character: None,
            conversation_length: runtime::DEFAULT_CONVERSATION_LENGTH,
            strict: false,
        }
    }
}

impl AppConfig {
    /// Parse a config from TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid agent config")
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }

    /// The move validation mode.
    pub fn validation(&self) -> Validation {
        if self.strict {
            Validation::Strict
        } else {
            Validation::Shallow
        }
    }

    /// The active character: the `--character` flag, then the configured
    /// file, then the built-in one.
    pub fn load_character(&self, flag: Option<&Path>) -> Result<Character> {
        match flag.or(self.character.as_deref()) {
            Some(path) => Character::load(path),
            None => Ok(eliza()),
        }
    }
}

/// Resolve the agent config following the priority chain.
pub fn resolve_config(config_flag: Option<&Path>) -> Result<AppConfig> {
    // 1. Explicit --config flag.
    if let Some(path) = config_flag {
        return AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }

    // 2. Workspace config: {cwd}/.mancala/config.toml
    let workspace_path = PathBuf::from(".mancala/config.toml");
    if workspace_path.exists() {
        return AppConfig::load(&workspace_path)
            .context("failed to load workspace config from .mancala/config.toml");
    }

    // 3. Global default: ~/.config/mancala/config.toml
    let global_path = global_config_path();
    if global_path.exists() {
        return AppConfig::load(&global_path).context("failed to load global config");
    }

    generate_default_config(&global_path)?;
    tracing::info!("generated default config at {}", global_path.display());
    AppConfig::load(&global_path).context("failed to load generated default config")
}

/// Path to the global default config.
pub fn global_config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("mancala")
        .join("config.toml")
}

/// Write the default config to `path`.
pub fn generate_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config to {}", path.display()))?;
    Ok(())
}
