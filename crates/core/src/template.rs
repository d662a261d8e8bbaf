//! Prompt template rendering.

use crate::{Memory, State};

/// Render `template`, replacing each `{{key}}` with its state value.
///
/// Unknown keys render as the empty string. An unterminated `{{` is kept
/// verbatim.
pub fn compose_context(state: &State, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = after[..end].trim();
        out.push_str(state.get(key).unwrap_or_default());
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Render messages one per line as `user: text`.
pub fn format_messages(messages: &[Memory]) -> String {
    messages
        .iter()
        .map(|m| match &m.content.action {
            Some(action) => format!("{}: {} ({action})", m.user, m.content.text),
            None => format!("{}: {}", m.user, m.content.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
