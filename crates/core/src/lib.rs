//! Core abstractions for the mancala agent.
//!
//! A [`Character`] is pure config. Conversation turns are [`Memory`]
//! entries, the prompt-facing view of a conversation is a [`State`], and
//! behaviour the model can trigger is an [`Action`]. Actions only see the
//! runtime through the object-safe [`AgentRuntime`] seam.

pub use {
    action::{Action, AgentRuntime, Callback},
    character::{Character, CharacterSettings, MessageExample, Style},
    llm::ModelClass,
    memory::{Content, Memory},
    settings::Settings,
    state::State,
    template::{compose_context, format_messages},
};

mod action;
mod character;
mod memory;
mod settings;
mod state;
mod template;
