//! Directive scanning
//!
//! One pass with a single pattern turns the template into an ordered list of
//! directive records. Text between records is literal output; the interpreter
//! never re-tokenizes, it only moves its cursor across this list.

use std::sync::LazyLock;

use regex::Regex;

/// The directive shape: `{<tag>:<payload>}` with a one-letter kind tag
static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([vilrfemxn]):([^}]*)\}").expect("directive pattern compiles"));

/// The nine directive kinds, keyed by their tag letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `v` - substitute a scalar value
    Variable,
    /// `i` - render another template file in place
    Include,
    /// `l` - iterate a collection; payload `end` closes the body
    Loop,
    /// `r` - emit the payload verbatim
    Raw,
    /// `f` - call a built-in function
    Function,
    /// `e` - render the block when a value equals a literal
    Equals,
    /// `m` - render the block when a value matches a pattern in full
    Regex,
    /// `x` - render the block when a path resolves
    Exists,
    /// `n` - render the block when a path does not resolve
    NotExists,
}

impl DirectiveKind {
    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "v" => Self::Variable,
            "i" => Self::Include,
            "l" => Self::Loop,
            "r" => Self::Raw,
            "f" => Self::Function,
            "e" => Self::Equals,
            "m" => Self::Regex,
            "x" => Self::Exists,
            "n" => Self::NotExists,
            _ => return None,
        })
    }

    /// The tag letter, used in error reports
    pub fn tag(self) -> char {
        match self {
            Self::Variable => 'v',
            Self::Include => 'i',
            Self::Loop => 'l',
            Self::Raw => 'r',
            Self::Function => 'f',
            Self::Equals => 'e',
            Self::Regex => 'm',
            Self::Exists => 'x',
            Self::NotExists => 'n',
        }
    }
}

/// One directive occurrence within a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Raw text between `:` and `}`, not yet trimmed or split
    pub payload: String,
    /// Byte offset of the opening `{`
    pub start: usize,
    /// Byte length including both delimiters
    pub len: usize,
}

impl Directive {
    /// Byte offset just past the closing `}`
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// True for the `end` payload that closes loop and conditional blocks
    pub fn is_end_marker(&self) -> bool {
        self.payload.trim() == "end"
    }
}

/// Scan a template into its ordered directive list
///
/// Text that does not match the directive shape, including braces with an
/// unknown tag letter or no colon, stays literal.
pub fn scan_directives(template: &str) -> Vec<Directive> {
    let mut directives = Vec::new();
    for caps in DIRECTIVE.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(kind) = DirectiveKind::from_tag(&caps[1]) else {
            continue;
        };
        directives.push(Directive {
            kind,
            payload: caps[2].to_string(),
            start: whole.start(),
            len: whole.len(),
        });
    }
    directives
}
