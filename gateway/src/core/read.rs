//! Path-addressed JSON tree traversal

use serde_json::Value;

use super::path::parse_path;

/// Resolve `path` against `root` without mutating or creating anything.
///
/// Returns `None` on any structural mismatch: absent property, index out of
/// bounds, or a segment applied to a node of the wrong kind. Callers
/// distinguish "field absent" from a malformed body by parsing the body
/// upstream of this function.
pub fn read<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = root;
    for segment in parse_path(path) {
        if !segment.name.is_empty() {
            node = node.as_object()?.get(&segment.name)?;
        }
        if let Some(index) = segment.index {
            node = node.as_array()?.get(index)?;
        }
    }
    Some(node)
}

/// Text form of a scalar node.
///
/// Containers and `null` do not coerce; the caller decides whether that is
/// a mapping error (content extraction) or a fallback (error extraction).
pub fn scalar_text(node: &Value) -> Option<String> {
    match node {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
