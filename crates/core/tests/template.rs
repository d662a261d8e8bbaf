//! Tests for template composition.

use mancala_core::{Content, Memory, State, compose_context, format_messages};

fn state() -> State {
    let mut state = State {
        agent_name: "Eliza".into(),
        ..Default::default()
    };
    state.set_recent_messages(vec![
        Memory::text("alice", "It's your turn in game 0x123"),
        Memory::new("Eliza", Content::new("moving").with_action("MOVE_GAME")),
    ]);
    state
}

#[test]
fn compose_replaces_known_keys() {
    let out = compose_context(&state(), "{{agentName}} sees:\n{{recentMessages}}");
    assert_eq!(
        out,
        "Eliza sees:\nalice: It's your turn in game 0x123\nEliza: moving (MOVE_GAME)"
    );
}

#[test]
fn compose_unknown_key_is_empty() {
    assert_eq!(compose_context(&state(), "a{{missing}}b"), "ab");
}

#[test]
fn compose_extra_values() {
    let mut state = state();
    state.set("gameId", "0xabc");
    assert_eq!(compose_context(&state, "game {{ gameId }}"), "game 0xabc");
}

#[test]
fn compose_keeps_unterminated_placeholder() {
    assert_eq!(compose_context(&state(), "x {{agentName"), "x {{agentName");
}

#[test]
fn compose_keeps_json_braces() {
    let template = "{\n  \"gameId\": \"0x123\"\n}";
    assert_eq!(compose_context(&state(), template), template);
}

#[test]
fn format_messages_empty() {
    assert_eq!(format_messages(&[]), "");
}
