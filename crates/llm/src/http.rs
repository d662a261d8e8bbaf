//! Chat completions over HTTP.

use crate::{General, LLM, Message, Request, Response};
use anyhow::{Context, Result, bail};
use reqwest::{Client, header};

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpProvider {
    /// Talk to `endpoint` without authentication.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    /// Authenticate with `key` as a bearer token.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// The endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether requests carry an API key.
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }
}

impl LLM for HttpProvider {
    async fn send(&self, config: &General, messages: &[Message]) -> Result<Response> {
        let body = Request::new(config, messages);
        tracing::trace!("request: {}", serde_json::to_string(&body)?);

        let mut request = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.endpoint))?;
        let status = response.status();
        let text = response.text().await?;
        tracing::trace!("response: {text}");
        if !status.is_success() {
            bail!("model request failed with {status}: {text}");
        }

        let response: Response =
            serde_json::from_str(&text).context("invalid chat completion response")?;
        if let Some(usage) = response.usage {
            tracing::debug!(
                "{} used {} prompt and {} completion tokens",
                response.model,
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }
        Ok(response)
    }
}
