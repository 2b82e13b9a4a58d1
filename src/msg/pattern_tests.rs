use std::collections::HashMap;

use serde_json::json;

use crate::msg::pattern::{process_pattern, process_patterns, strip_placeholder};
use crate::msg::types::Msg;

fn msg_with(metadata: &[(&str, &str)], payload: serde_json::Value) -> Msg {
    let metadata: HashMap<String, String> = metadata
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Msg::new("device-1", "POST_TELEMETRY_REQUEST", metadata, payload)
}

#[test]
fn test_substitutes_from_metadata() {
    let msg = msg_with(&[("sensor", "temperature")], json!({}));
    assert_eq!(process_pattern("${sensor}", &msg), "temperature");
}

#[test]
fn test_substitutes_from_payload_when_metadata_misses() {
    let msg = msg_with(&[], json!({"sensor": "humidity", "room": 12}));
    assert_eq!(process_pattern("${sensor}", &msg), "humidity");
    assert_eq!(process_pattern("${room}", &msg), "12");
}

#[test]
fn test_metadata_wins_over_payload() {
    let msg = msg_with(&[("sensor", "temperature")], json!({"sensor": "humidity"}));
    assert_eq!(process_pattern("${sensor}", &msg), "temperature");
}

#[test]
fn test_unresolved_placeholder_is_left_intact() {
    let msg = msg_with(&[], json!({}));
    assert_eq!(process_pattern("${missing}", &msg), "${missing}");
}

#[test]
fn test_null_payload_field_does_not_resolve() {
    let msg = msg_with(&[], json!({"sensor": null}));
    assert_eq!(process_pattern("${sensor}", &msg), "${sensor}");
}

#[test]
fn test_multiple_placeholders_in_one_pattern() {
    let msg = msg_with(&[("a", "x"), ("b", "y")], json!({}));
    assert_eq!(process_pattern("${a}_${b}", &msg), "x_y");
}

#[test]
fn test_plain_text_passes_through() {
    let msg = msg_with(&[("sensor", "temperature")], json!({}));
    assert_eq!(process_pattern("temperature", &msg), "temperature");
}

#[test]
fn test_process_patterns_maps_every_entry() {
    let msg = msg_with(&[("sensor", "temperature")], json!({}));
    let keys = vec!["${sensor}".to_string(), "pressure".to_string()];
    assert_eq!(
        process_patterns(&keys, &msg),
        vec!["temperature".to_string(), "pressure".to_string()]
    );
}

#[test]
fn test_strip_placeholder_removes_decoration() {
    assert_eq!(strip_placeholder("${startTs}"), "startTs");
    assert_eq!(strip_placeholder("endTs"), "endTs");
}
