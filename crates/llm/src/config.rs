//! Configuration for model requests

use crate::HttpProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Size class of the model used for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelClass {
    /// Cheap and fast.
    Small,
    /// General purpose.
    #[default]
    Medium,
    /// Most capable.
    Large,
}

/// Per-request configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct General {
    /// The model to use
    pub model: String,

    /// The sampling temperature
    pub temperature: f32,

    /// The maximum number of tokens to generate
    pub max_tokens: usize,

    /// Whether to ask for a JSON object response
    pub json: bool,
}

impl General {
    /// Create a new configuration
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

impl Default for General {
    fn default() -> Self {
        Self {
            model: "gpt-4o".into(),
            temperature: 0.7,
            max_tokens: 1024,
            json: false,
        }
    }
}

/// Model endpoint and per-class model names.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// OpenAI-compatible chat completions endpoint.
    pub endpoint: String,
    /// API key (supports `${ENV_VAR}` expansion). Empty means no auth.
    pub api_key: String,
    /// Model used for [`ModelClass::Small`].
    pub small: String,
    /// Model used for [`ModelClass::Medium`].
    pub medium: String,
    /// Model used for [`ModelClass::Large`].
    pub large: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: usize,
}

impl ModelConfig {
    /// The model name for `class`.
    pub fn model_for(&self, class: ModelClass) -> &str {
        match class {
            ModelClass::Small => &self.small,
            ModelClass::Medium => &self.medium,
            ModelClass::Large => &self.large,
        }
    }

    /// Request configuration for `class`.
    pub fn general(&self, class: ModelClass) -> General {
        General {
            model: self.model_for(class).to_owned(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            json: false,
        }
    }

    /// Build the HTTP provider for this endpoint.
    pub fn provider(&self, client: Client) -> HttpProvider {
        let provider = HttpProvider::new(client, self.endpoint.as_str());
        let key = expand_env(&self.api_key);
        if key.is_empty() {
            tracing::warn!("no api key configured for {}", self.endpoint);
            return provider;
        }
        provider.with_api_key(key)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".into(),
            api_key: "${OPENAI_API_KEY}".into(),
            small: "gpt-4o-mini".into(),
            medium: "gpt-4o".into(),
            large: "gpt-4o".into(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Replace every `${NAME}` with the value of the environment variable
/// `NAME`, or the empty string when it is unset.
pub fn expand_env(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        out.push_str(&std::env::var(&after[..end]).unwrap_or_default());
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}
