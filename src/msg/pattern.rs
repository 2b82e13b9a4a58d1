use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::msg::types::Msg;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder regex is valid"));

/// Substitute `${key}` placeholders in `pattern` against the message.
/// Metadata wins over payload; placeholders that resolve to nothing are
/// left in place.
pub fn process_pattern(pattern: &str, msg: &Msg) -> String {
    PLACEHOLDER
        .replace_all(pattern, |caps: &Captures| {
            let name = &caps[1];
            lookup(msg, name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Substitute placeholders in every pattern of the list.
pub fn process_patterns(patterns: &[String], msg: &Msg) -> Vec<String> {
    patterns.iter().map(|p| process_pattern(p, msg)).collect()
}

/// Strip the placeholder decoration (`$`, `{`, `}`) from a configured
/// pattern, leaving the bare metadata key. Used for direct metadata
/// lookups and for error texts.
pub fn strip_placeholder(pattern: &str) -> String {
    pattern.replace(['$', '{', '}'], "")
}

fn lookup(msg: &Msg, name: &str) -> Option<String> {
    if let Some(v) = msg.metadata.get(name) {
        return Some(v.clone());
    }
    match msg.payload.get(name) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(v) => Some(v.to_string()),
    }
}
