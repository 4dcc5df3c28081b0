//! Safe dotted-path traversal of a configuration tree

use serde_json::Value;

/// Segments that are never traversed, guarding against prototype-pollution
/// style lookups coming in through user-controlled notations.
const DENIED_SEGMENTS: &[&str] = &["__proto__", "prototype", "constructor"];

/// Whether every segment of the notation is allowed to be traversed.
pub fn is_safe_notation(notation: &str) -> bool {
    notation
        .split('.')
        .all(|segment| !DENIED_SEGMENTS.contains(&segment))
}

/// Look up the value at a dotted notation such as `editor.minimap.enabled`.
///
/// Objects are traversed by key, arrays by numeric index. A notation that
/// touches a denied segment, a missing key, or a scalar mid-path yields
/// `None` — "not found", never an error.
pub fn get_path<'a>(root: &'a Value, notation: &str) -> Option<&'a Value> {
    if !is_safe_notation(notation) {
        tracing::debug!(notation, "rejected unsafe config notation");
        return None;
    }

    let mut current = root;
    for segment in notation.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
