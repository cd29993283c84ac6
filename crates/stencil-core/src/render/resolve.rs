//! Relative path resolution against the loop frame stack
//!
//! Inside a loop body, path expressions are anchored to the element the
//! innermost frame currently points at. Only the innermost frame contributes;
//! outer frames are already folded into its `list_path`, which was itself
//! resolved when that loop started.

use super::frames::LoopFrame;

/// Leading marker that pins an expression to the document root
pub const ROOT_ESCAPE: char = '$';

/// Turn a possibly-relative expression into an absolute path
///
/// With no open frame the expression passes through unchanged. A `$` prefix
/// strips the marker (and any dots after it) and anchors at the root from any
/// depth. Otherwise the innermost frame's element path becomes the prefix:
/// an empty or `.` expression yields the element itself, anything else is
/// appended to it textually, so relative expressions conventionally start
/// with a dot.
pub fn resolve_path(expression: &str, frames: &[LoopFrame]) -> String {
    let expression = expression.trim();
    if let Some(rest) = expression.strip_prefix(ROOT_ESCAPE) {
        return rest.trim_start_matches('.').to_string();
    }
    let Some(frame) = frames.last() else {
        return expression.to_string();
    };
    let prefix = concrete_prefix(&frame.list_path, frame.index);
    if expression.is_empty() || expression == "." {
        return prefix;
    }
    let mut resolved = prefix;
    resolved.push_str(expression);
    resolved
}

/// Splice a concrete element index into a collection pattern
pub fn concrete_prefix(list_path: &str, index: usize) -> String {
    match list_path.rfind("[]") {
        Some(at) => format!("{}[{}]{}", &list_path[..at], index, &list_path[at + 2..]),
        None => list_path.to_string(),
    }
}
