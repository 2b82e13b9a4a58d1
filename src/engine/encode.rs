use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::engine::errors::EncodingError;
use crate::msg::types::Msg;
use crate::node::config::FetchMode;
use crate::storage::types::{TsEntry, TsValue};

/// Per-key rendered results: key → JSON text ready for metadata.
pub type ResultMapping = IndexMap<String, String>;

/// Encode fetched entries into per-key metadata values.
///
/// `All` mode groups the intermixed entries by key into a `{ts, value}`
/// array, preserving arrival order (per key, entries already arrive in the
/// query's requested sort order). Single-row modes render the bare value;
/// a later entry for the same key overwrites an earlier one.
pub fn encode(fetch_mode: FetchMode, entries: &[TsEntry]) -> Result<ResultMapping, EncodingError> {
    debug!(
        target: "ts_enrich::encode",
        entries = entries.len(),
        mode = ?fetch_mode,
        "Encoding fetched telemetry"
    );
    match fetch_mode {
        FetchMode::All => encode_arrays(entries),
        FetchMode::First | FetchMode::Last => Ok(encode_scalars(entries)),
    }
}

/// Write results into the message metadata. Only queried keys that
/// produced data are touched; everything else stays as it was.
pub fn apply_to_metadata(msg: &mut Msg, keys: &[String], mapping: &ResultMapping) {
    for key in keys {
        if let Some(rendered) = mapping.get(key) {
            msg.put_metadata(key.clone(), rendered.clone());
        }
    }
}

fn encode_scalars(entries: &[TsEntry]) -> ResultMapping {
    let mut mapping = ResultMapping::new();
    for entry in entries {
        mapping.insert(entry.key.clone(), entry.value.as_string());
    }
    mapping
}

fn encode_arrays(entries: &[TsEntry]) -> Result<ResultMapping, EncodingError> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for entry in entries {
        let rendered = render_entry(entry)?;
        groups.entry(entry.key.clone()).or_default().push(rendered);
    }
    Ok(groups
        .into_iter()
        .map(|(key, items)| (key, format!("[{}]", items.join(","))))
        .collect())
}

/// Render one entry as `{ts:<ms>,value:<typed>}` with unquoted field names.
fn render_entry(entry: &TsEntry) -> Result<String, EncodingError> {
    let mut out = String::from("{ts:");
    out.push_str(itoa::Buffer::new().format(entry.ts));
    out.push_str(",value:");
    match &entry.value {
        TsValue::Str(s) => out.push_str(&Value::String(s.clone()).to_string()),
        TsValue::Long(v) => out.push_str(itoa::Buffer::new().format(*v)),
        TsValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        TsValue::Double(d) => out.push_str(ryu::Buffer::new().format(*d)),
        TsValue::Json(raw) => {
            let parsed: Value = serde_json::from_str(raw).map_err(|e| EncodingError {
                key: entry.key.clone(),
                raw: raw.clone(),
                source: e,
            })?;
            write_relaxed(&parsed, &mut out);
        }
    }
    out.push('}');
    Ok(out)
}

/// Relaxed JSON: object field names are written unquoted, recursively.
/// String values keep standard JSON quoting and escaping.
fn write_relaxed(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(_) => out.push_str(&value.to_string()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_relaxed(item, out);
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            for (i, (name, item)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(name);
                out.push(':');
                write_relaxed(item, out);
            }
            out.push('}');
        }
    }
}
