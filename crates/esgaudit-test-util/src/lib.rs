//! Shared test utilities for the esgaudit workspace.
//!
//! Lives in its own crate because `xtask` and the CLI integration tests both need
//! `normalize_nondeterministic`, which a `#[cfg(test)]` module could not provide.

use serde_json::Value;

const ENVELOPE_KEYS: [&str; 5] = ["schema", "tool", "verdict", "exceptions", "data"];

/// Normalize run-dependent JSON fields for golden-file comparison.
///
/// 1. **Root-only**: when the root object is a report envelope (all of `schema`,
///    `tool`, `verdict`, `exceptions`, `data`), `tool.version` becomes `"__VERSION__"`
///    and `data.input` becomes `"__INPUT__"`. Exception `data` payloads with the same
///    key names are left alone.
///
/// 2. **Recursive**: `started_at` and `finished_at` become `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ENVELOPE_KEYS.iter().all(|k| obj.contains_key(*k));
        if is_envelope {
            if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
                && tool.contains_key("version")
            {
                tool.insert(
                    "version".to_string(),
                    Value::String("__VERSION__".to_string()),
                );
            }
            if let Some(data) = obj.get_mut("data").and_then(Value::as_object_mut)
                && data.get("input").is_some_and(Value::is_string)
            {
                data.insert("input".to_string(), Value::String("__INPUT__".to_string()));
            }
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
