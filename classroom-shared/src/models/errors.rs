use serde_json::Value;

/// Extracts the human-readable message from a backend error body.
///
/// Prefers a `message` member, then an `error` member, then the body itself
/// when it is a plain string. Blank strings never count as a message.
pub fn surfaced_message(body: &Value) -> Option<String> {
    match body {
        Value::Object(map) => ["message", "error"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(member_text),
        Value::String(text) => non_blank(text),
        _ => None,
    }
}

fn member_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) => non_blank(text),
        other => Some(other.to_string()),
    }
}

fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
