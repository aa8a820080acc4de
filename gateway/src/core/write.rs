//! Path-addressed JSON tree construction

use serde_json::{Map, Value};

use super::path::{parse_path, PathSegment};

/// Set `value` at `path` inside `root`, creating intermediate objects and
/// arrays on demand and overwriting whatever was there.
///
/// Existing nodes along the way that do not match the shape the path
/// requires are replaced. Paths come from trusted mapping configuration,
/// not caller input, so there is no failure mode.
pub fn write(root: &mut Value, path: &str, value: Value) {
    let mut segments = parse_path(path);
    let Some(last) = segments.pop() else {
        return;
    };
    let mut node = root;
    for segment in &segments {
        node = descend(node, segment);
    }
    place(node, &last, value);
}

/// Walk one intermediate segment, materializing the container it names.
fn descend<'a>(node: &'a mut Value, segment: &PathSegment) -> &'a mut Value {
    match segment.index {
        Some(index) => {
            let slot = array_slot(node, segment, index);
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            slot
        }
        None => {
            let entry = named_entry(node, &segment.name);
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            entry
        }
    }
}

/// Assign `value` at the final segment.
fn place(node: &mut Value, segment: &PathSegment, value: Value) {
    match segment.index {
        Some(index) => *array_slot(node, segment, index) = value,
        None => *named_entry(node, &segment.name) = value,
    }
}

/// The `index` slot of the array addressed by `segment`, growing the array
/// with null placeholders until the slot exists. An empty segment name
/// addresses the current node itself.
fn array_slot<'a>(node: &'a mut Value, segment: &PathSegment, index: usize) -> &'a mut Value {
    let target = if segment.name.is_empty() {
        node
    } else {
        named_entry(node, &segment.name)
    };
    if !target.is_array() {
        *target = Value::Array(Vec::new());
    }
    match target {
        Value::Array(items) => {
            while items.len() <= index {
                items.push(Value::Null);
            }
            &mut items[index]
        }
        _ => unreachable!("target was just coerced to an array"),
    }
}

/// Mutable reference to the named property of `node`, coercing `node` to an
/// object and inserting a null placeholder when the property is absent.
fn named_entry<'a>(node: &'a mut Value, name: &str) -> &'a mut Value {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map.entry(name.to_string()).or_insert(Value::Null),
        _ => unreachable!("node was just coerced to an object"),
    }
}
