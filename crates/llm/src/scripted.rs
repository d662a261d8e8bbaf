//! Scripted LLM provider for testing.
//!
//! Replays queued replies in order and records every request, so tests can
//! drive code that talks to a model without a network.

use crate::{Choice, General, LLM, Message, Reply, Response, Role};
use anyhow::{Result, anyhow};
use parking_lot::Mutex;
use std::{collections::VecDeque, sync::Arc};

/// A provider that answers from a queue of canned replies.
///
/// Clones share the same queue and request log.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<Result<String, String>>>>,
    requests: Arc<Mutex<Vec<(General, Vec<Message>)>>>,
}

impl ScriptedProvider {
    /// Create a provider with no replies queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().push_back(Ok(text.into()));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: impl Into<String>) -> Self {
        self.replies.lock().push_back(Err(error.into()));
        self
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<(General, Vec<Message>)> {
        self.requests.lock().clone()
    }
}

impl LLM for ScriptedProvider {
    async fn send(&self, config: &General, messages: &[Message]) -> Result<Response> {
        self.requests
            .lock()
            .push((config.clone(), messages.to_vec()));
        let reply = self
            .replies
            .lock()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted reply left"))?;
        let text = reply.map_err(|e| anyhow!(e))?;
        Ok(Response {
            id: format!("scripted-{}", self.requests.lock().len()),
            model: config.model.clone(),
            choices: vec![Choice {
                index: 0,
                message: Reply {
                    role: Some(Role::Assistant),
                    content: Some(text),
                },
                finish_reason: Some("stop".into()),
            }],
            usage: None,
        })
    }
}
