//! Unit tests for frame-relative path resolution

use super::frames::LoopFrame;
use super::super::resolve::{concrete_prefix, resolve_path};

fn frame(list_path: &str, index: usize) -> LoopFrame {
    LoopFrame {
        list_path: list_path.to_string(),
        index,
        length: 10,
        start_directive_index: 1,
        start_text_offset: 0,
    }
}

#[test]
fn test_resolve_without_frames_passes_through() {
    assert_eq!(resolve_path("a.b", &[]), "a.b");
}

#[test]
fn test_resolve_trims_expression() {
    assert_eq!(resolve_path(" a.b ", &[]), "a.b");
}

#[test]
fn test_resolve_dot_yields_current_element() {
    assert_eq!(resolve_path(".", &[frame("items[]", 2)]), "items[2]");
}

#[test]
fn test_resolve_empty_yields_current_element() {
    assert_eq!(resolve_path("", &[frame("items[]", 0)]), "items[0]");
}

#[test]
fn test_resolve_appends_relative_expression() {
    assert_eq!(resolve_path(".name", &[frame("items[]", 1)]), "items[1].name");
}

#[test]
fn test_resolve_uses_innermost_frame_only() {
    // the outer loop is already folded into the inner frame's list path
    let frames = [frame("a[]", 0), frame("a[0].b[]", 3)];
    assert_eq!(resolve_path(".x", &frames), "a[0].b[3].x");
}

#[test]
fn test_resolve_root_escape_inside_frame() {
    assert_eq!(
        resolve_path("$top.name", &[frame("items[]", 1)]),
        "top.name"
    );
}

#[test]
fn test_resolve_root_escape_strips_leading_dots() {
    assert_eq!(resolve_path("$.name", &[frame("items[]", 1)]), "name");
}

#[test]
fn test_resolve_root_escape_outside_frames() {
    assert_eq!(resolve_path("$a.b", &[]), "a.b");
}

#[test]
fn test_concrete_prefix_trailing_wildcard() {
    assert_eq!(concrete_prefix("items[]", 4), "items[4]");
}

#[test]
fn test_concrete_prefix_mid_pattern_wildcard() {
    assert_eq!(concrete_prefix("a[].b", 2), "a[2].b");
}

#[test]
fn test_concrete_prefix_without_wildcard_is_unchanged() {
    assert_eq!(concrete_prefix("a.b", 1), "a.b");
}
