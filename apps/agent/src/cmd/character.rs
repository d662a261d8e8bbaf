//! Character display command.

use anyhow::{Context, Result};
use mcore::Character;

/// Print `character` as TOML with its secrets redacted.
pub fn show(character: &Character) -> Result<()> {
    print!("{}", render(character)?);
    Ok(())
}

/// Render `character` as TOML with its secrets redacted.
pub fn render(character: &Character) -> Result<String> {
    let mut character = character.clone();
    for value in character.settings.secrets.values_mut() {
        *value = "<redacted>".into();
    }
    toml::to_string_pretty(&character).context("failed to serialize character")
}
