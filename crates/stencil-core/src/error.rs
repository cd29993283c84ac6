//! Error types for stencil-core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering a template
#[derive(Error, Debug)]
pub enum StencilError {
    /// A block or loop start directive has no matching end marker
    #[error("UNMATCHED_END: no '{{{tag}:end}}' for the block opened at directive {index} (byte {offset})")]
    UnmatchedEnd {
        tag: char,
        index: usize,
        offset: usize,
    },

    /// A directive payload does not split into the tokens its kind expects
    #[error("BAD_DIRECTIVE_ARGS: '{{{tag}:{payload}}}' arguments do not parse")]
    BadDirectiveArgs { tag: char, payload: String },

    /// A match-block pattern failed to compile
    #[error("INVALID_REGEX: pattern '{pattern}' does not compile: {reason}")]
    InvalidRegex { pattern: String, reason: String },

    /// An included template file could not be read
    #[error("INCLUDE_NOT_FOUND: failed to read include '{}'", path.display())]
    IncludeNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Include nesting went past the configured limit
    #[error("INCLUDE_DEPTH: include nesting exceeded the limit of {limit}")]
    IncludeDepth { limit: usize },

    /// The values document is not valid JSON
    #[error("INVALID_JSON: values document does not parse: {0}")]
    InvalidJson(String),

    /// Filesystem error outside of include resolution
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StencilError {
    fn from(err: serde_json::Error) -> Self {
        StencilError::InvalidJson(err.to_string())
    }
}

/// Convenience Result type for stencil operations
pub type Result<T> = std::result::Result<T, StencilError>;
