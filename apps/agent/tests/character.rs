//! Tests for the built-in character.

use mancala_agent::{character::eliza, cmd::character::render};
use mcore::Character;

#[test]
fn eliza_loads_the_starknet_plugin() {
    let eliza = eliza();
    assert_eq!(eliza.name, "Eliza");
    assert!(eliza.uses_plugin(plugin::NAME));
    assert_eq!(eliza.message_examples.len(), 2);
    assert!(eliza.system.contains(plugin::CONTRACT_ADDRESS));
    assert!(eliza.system.contains("move(gameId, selectedPit)"));
    assert!(eliza.settings.secrets.is_empty());
}

#[test]
fn render_redacts_secrets() {
    let character = eliza().secret("STARKNET_PRIVATE_KEY", "0x5678");
    let toml = render(&character).unwrap();
    assert!(toml.contains("<redacted>"));
    assert!(!toml.contains("0x5678"));

    let parsed = Character::from_toml(&toml).unwrap();
    assert_eq!(parsed.name, "Eliza");
    assert_eq!(parsed.message_examples, eliza().message_examples);
}
