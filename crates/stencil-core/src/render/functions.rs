//! Built-in function directives
//!
//! A `{f:...}` payload is a function name followed by arguments. The name
//! ends at the first comma or whitespace; everything after that single
//! delimiter is the argument text. Path arguments are trimmed and tolerate
//! the comma a spaced name delimiter leaves in front of them, literal
//! arguments are taken verbatim so a separator can carry significant spaces.

use serde_json::Value;

use crate::json;

use super::frames::LoopFrame;
use super::resolve::resolve_path;

/// A split `{f:...}` payload
///
/// `args` is `None` when the payload held no delimiter at all, which is
/// distinct from an empty argument after a trailing delimiter.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FunctionCall<'a> {
    pub name: &'a str,
    pub args: Option<&'a str>,
}

pub(crate) fn parse_call(payload: &str) -> FunctionCall<'_> {
    let payload = payload.trim_start();
    match payload.find(|c: char| c == ',' || c.is_whitespace()) {
        Some(at) => FunctionCall {
            name: &payload[..at],
            args: Some(&payload[at + 1..]),
        },
        None => FunctionCall {
            name: payload.trim_end(),
            args: None,
        },
    }
}

/// Evaluate a function payload to the text it emits
///
/// Returns `None` when the call is malformed: unknown name, or a required
/// argument missing. Position functions with no open frame are well-formed
/// no-ops that emit nothing.
pub(crate) fn eval_function(payload: &str, doc: &Value, frames: &[LoopFrame]) -> Option<String> {
    let call = parse_call(payload);
    match call.name {
        "listInfo" => Some(resolve_path("", frames)),
        "list" => {
            let pattern = non_empty(path_args(call.args?).trim())?;
            Some(json::enumerate_scalars(doc, pattern).join("\n"))
        }
        "join" => {
            let (raw_path, delimiter) = path_args(call.args?).split_once(',')?;
            let pattern = non_empty(raw_path.trim())?;
            Some(json::enumerate_scalars(doc, pattern).join(delimiter))
        }
        "last" => frame_literal(call.args?, frames, LoopFrame::is_last),
        "not_last" => frame_literal(call.args?, frames, |f| !f.is_last()),
        "not_first" => frame_literal(call.args?, frames, |f| !f.is_first()),
        "upper" => Some(scalar_argument(call.args?, doc, frames)?.to_uppercase()),
        "lower" => Some(scalar_argument(call.args?, doc, frames)?.to_lowercase()),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Drop the comma a spaced name delimiter leaves in front of a path
/// argument, so `join , a, b` reads like `join,a, b`
fn path_args(args: &str) -> &str {
    let args = args.trim_start();
    args.strip_prefix(',').unwrap_or(args)
}

/// Emit the literal when the innermost frame satisfies the position test
fn frame_literal(
    literal: &str,
    frames: &[LoopFrame],
    emit: impl Fn(&LoopFrame) -> bool,
) -> Option<String> {
    match frames.last() {
        Some(frame) if emit(frame) => Some(literal.to_string()),
        _ => Some(String::new()),
    }
}

/// Fetch the frame-resolved scalar argument; an absent value reads as empty
fn scalar_argument(args: &str, doc: &Value, frames: &[LoopFrame]) -> Option<String> {
    let path = non_empty(path_args(args).trim())?;
    Some(json::scalar_at(doc, &resolve_path(path, frames)).unwrap_or_default())
}
