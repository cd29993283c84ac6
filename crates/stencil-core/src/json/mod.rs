//! Read-only accessors over the JSON values document
//!
//! The renderer never mutates the document; everything it needs is covered by
//! four questions: does a node exist, what is its text form, how many nodes
//! match a wildcard pattern, and what are those nodes.

pub mod path;

use serde_json::Value;

use path::Segment;

/// Fetch the node addressed by a path expression
///
/// An empty expression addresses the document root. Returns `None` when any
/// segment is missing or applied to the wrong node type.
pub fn node_at<'a>(doc: &'a Value, path_expr: &str) -> Option<&'a Value> {
    descend(doc, &path::parse(path_expr))
}

/// True when the path addresses an existing node
pub fn exists(doc: &Value, path_expr: &str) -> bool {
    node_at(doc, path_expr).is_some()
}

/// Fetch a node and convert it to text; `None` for missing or non-scalar nodes
pub fn scalar_at(doc: &Value, path_expr: &str) -> Option<String> {
    node_at(doc, path_expr).and_then(stringify)
}

/// Text form of a scalar node
///
/// Strings pass through without quotes, numbers and booleans use their JSON
/// notation. Null, arrays and objects have no text form.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Collect every node matched by a pattern with at most one `[]` wildcard
///
/// The segments before the wildcard must address an array; the segments after
/// it are resolved against each element, skipping elements where the suffix is
/// missing. A pattern without a wildcard matches at most one node. Anything
/// that fails to resolve yields an empty list rather than an error.
pub fn enumerate_nodes<'a>(doc: &'a Value, pattern: &str) -> Vec<&'a Value> {
    let segments = path::parse(pattern);
    let Some(split) = segments
        .iter()
        .position(|s| matches!(s, Segment::Wildcard))
    else {
        return descend(doc, &segments).into_iter().collect();
    };
    let (head, rest) = segments.split_at(split);
    let tail = &rest[1..];
    match descend(doc, head) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| descend(item, tail))
            .collect(),
        _ => Vec::new(),
    }
}

/// Collect the text forms of every scalar matched by a pattern
pub fn enumerate_scalars(doc: &Value, pattern: &str) -> Vec<String> {
    enumerate_nodes(doc, pattern)
        .into_iter()
        .filter_map(stringify)
        .collect()
}

fn descend<'a>(doc: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    let mut current = doc;
    for segment in segments {
        current = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => map.get(key)?,
            (Segment::Index(index), Value::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}
