//! One-shot move command.

use crate::cmd::{USER, printer};
use anyhow::{Result, anyhow, bail};
use llm::LLM;
use mcore::{AgentRuntime, Memory};
use runtime::Runtime;

/// Record `messages` as user turns and run `MOVE_GAME` on the last one.
///
/// Fails when the move was not submitted.
pub async fn run<P: LLM>(runtime: &Runtime<P>, messages: &[String]) -> Result<()> {
    let mut latest = None;
    for text in messages {
        let message = Memory::text(USER, text.as_str());
        runtime.remember(message.clone());
        latest = Some(message);
    }
    let message = latest.ok_or_else(|| anyhow!("no message to act on"))?;

    let agent = runtime.character().name.clone();
    let mut reply = printer(&agent);
    if !runtime
        .process_action(plugin::MOVE_GAME, &message, Some(&mut reply))
        .await?
    {
        bail!("{} did not complete", plugin::MOVE_GAME);
    }
    Ok(())
}
