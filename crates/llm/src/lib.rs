//! Model invocation types and traits.
//!
//! Shared chat types, the [`LLM`] provider trait, an OpenAI-compatible
//! [`HttpProvider`], and [`parse_json_object`] for pulling structured
//! answers out of free-form replies.

pub use chat::{Choice, Message, Reply, Request, Response, ResponseFormat, Role, Usage};
pub use config::{General, ModelClass, ModelConfig, expand_env};
pub use http::HttpProvider;
pub use object::parse_json_object;
pub use provider::LLM;
pub use reqwest::{self, Client};
#[cfg(feature = "testing")]
pub use scripted::ScriptedProvider;

mod chat;
mod config;
mod http;
mod object;
mod provider;
#[cfg(feature = "testing")]
mod scripted;
