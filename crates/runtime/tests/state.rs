//! Tests for state composition and conversation history.

use llm::ScriptedProvider;
use mancala_runtime::Runtime;
use mcore::{AgentRuntime, Character, Memory, compose_context};

fn runtime() -> Runtime<ScriptedProvider> {
    let character = Character::new("Eliza")
        .system("You play Mancala.")
        .bio("Mancala expert")
        .lore("Never lost a game");
    Runtime::new(character, ScriptedProvider::new())
}

#[test]
fn compose_state_fills_character_fields() {
    let rt = runtime();
    let state = rt.compose_state(&Memory::text("alice", "your turn"));
    assert_eq!(state.agent_name, "Eliza");
    assert_eq!(state.system, "You play Mancala.");
    assert_eq!(state.bio, "Mancala expert");
    assert_eq!(state.lore, "Never lost a game");
    assert_eq!(state.recent_messages, "alice: your turn");
}

#[test]
fn compose_state_does_not_duplicate_stored_message() {
    let rt = runtime();
    let message = Memory::text("alice", "your turn");
    rt.remember(message.clone());
    let state = rt.compose_state(&message);
    assert_eq!(state.recent_messages_data.len(), 1);
}

#[test]
fn conversation_length_keeps_latest_messages() {
    let rt = runtime().with_conversation_length(2);
    for text in ["one", "two", "three"] {
        rt.remember(Memory::text("alice", text));
    }
    let state = rt.compose_state(&Memory::text("alice", "four"));
    let texts: Vec<_> = state
        .recent_messages_data
        .iter()
        .map(|m| m.content.text.as_str())
        .collect();
    assert_eq!(texts, ["three", "four"]);
}

#[test]
fn update_recent_message_state_sees_new_messages() {
    let rt = runtime();
    let message = Memory::text("alice", "hi");
    rt.remember(message.clone());
    let mut state = rt.compose_state(&message);
    state.set("gameId", "0x1");
    rt.remember(Memory::text("bob", "board is 4 4 4 4 4 4"));

    let state = rt.update_recent_message_state(state);
    assert_eq!(state.recent_messages, "alice: hi\nbob: board is 4 4 4 4 4 4");
    assert_eq!(state.get("gameId"), Some("0x1"));
    assert_eq!(state.agent_name, "Eliza");
}

#[test]
fn update_recent_message_state_keeps_unstored_message() {
    let rt = runtime().with_conversation_length(2);
    rt.remember(Memory::text("bob", "game 0xabc"));
    let state = rt.compose_state(&Memory::text("alice", "pits 4 4 4 4 4 4"));
    rt.remember(Memory::text("bob", "your turn"));

    let state = rt.update_recent_message_state(state);
    assert_eq!(
        state.recent_messages,
        "bob: your turn\nalice: pits 4 4 4 4 4 4"
    );
}

#[test]
fn recent_messages_renders_into_templates() {
    let rt = runtime();
    rt.remember(Memory::text("alice", "game 0xabc, pits 4 4 4 4 4 4"));
    let state = rt.compose_state(&Memory::text("alice", "move please"));
    let context = compose_context(&state, "{{agentName}} reads:\n{{recentMessages}}");
    assert_eq!(
        context,
        "Eliza reads:\nalice: game 0xabc, pits 4 4 4 4 4 4\nalice: move please"
    );
}
