//! Line-oriented chat command.

use crate::cmd::{USER, printer};
use anyhow::Result;
use llm::LLM;
use mcore::{AgentRuntime, Memory};
use runtime::Runtime;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Explicit move prefix.
const MOVE_PREFIX: &str = "/move";

/// Store every line read from stdin and run the action it asks for.
pub async fn run<P: LLM>(runtime: &Runtime<P>) -> Result<()> {
    let agent = runtime.character().name.clone();
    println!("{agent} is listening (Ctrl+D to exit, /move to play)");
    println!("---");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some((text, forced)) = parse_line(&line) {
            respond(runtime, &agent, text, forced).await;
        }
    }
    Ok(())
}

/// Handle one chat message, running the action it names or, when
/// `forced`, `MOVE_GAME`.
///
/// Empty messages are not stored in the history.
pub async fn respond<P: LLM>(runtime: &Runtime<P>, agent: &str, text: &str, forced: bool) {
    let message = Memory::text(USER, text);
    if !text.is_empty() {
        runtime.remember(message.clone());
    }
    let action = if forced {
        runtime.action(plugin::MOVE_GAME)
    } else {
        runtime.action_in(text)
    };
    let Some(action) = action else {
        return;
    };

    let mut reply = printer(agent);
    match runtime
        .process_action(action.name(), &message, Some(&mut reply))
        .await
    {
        Ok(true) => {}
        Ok(false) => tracing::warn!("{} did not complete", action.name()),
        Err(e) => eprintln!("{e:#}"),
    }
}

/// Split a line into its message text and whether it forces a move.
///
/// Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Option<(&str, bool)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.strip_prefix(MOVE_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
            Some((rest.trim(), true))
        }
        _ => Some((line, false)),
    }
}
