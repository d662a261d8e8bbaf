//! Extracting JSON objects from model replies.

use serde_json::Value;

/// Pull a JSON object out of free-form model text.
///
/// Fenced code blocks are tried first, in order, with any language tag
/// (```` ```json ````, ```` ```JSON ````) stripped. Then the whole text, then
/// each balanced `{...}` span outside the fenced blocks. Returns `None`
/// unless the result is a JSON object.
pub fn parse_json_object(text: &str) -> Option<Value> {
    let (blocks, prose) = split_fences(text);
    blocks
        .into_iter()
        .find_map(as_object)
        .or_else(|| as_object(text.trim()))
        .or_else(|| {
            prose
                .match_indices('{')
                .filter_map(|(at, _)| balanced_span(&prose[at..]))
                .find_map(as_object)
        })
}

fn as_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(Value::is_object)
}

/// Fenced block bodies, and the text outside of them.
fn split_fences(text: &str) -> (Vec<&str>, String) {
    let mut blocks = Vec::new();
    let mut prose = String::new();
    let mut rest = text;
    while let Some(open) = rest.find("```") {
        let body = &rest[open + 3..];
        let Some(close) = body.find("```") else {
            break;
        };
        prose.push_str(&rest[..open]);
        prose.push('\n');
        let block = body[..close].trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        blocks.push(block.trim());
        rest = &body[close + 3..];
    }
    prose.push_str(rest);
    (blocks, prose)
}

fn balanced_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
