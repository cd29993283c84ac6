//! Path expression parsing
//!
//! A path addresses a node inside the values document with dotted keys and
//! bracketed indices: `paper.authors[0].name`. Empty brackets `[]` are the
//! wildcard segment used by loop patterns to stand for every element of an
//! array.

use std::mem;

/// One step of a parsed path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member access by key
    Key(String),
    /// Array element access by position
    Index(usize),
    /// The `[]` placeholder matching every array element
    Wildcard,
}

/// Parse a path expression into segments
///
/// Parsing is forgiving: separators may be omitted between a bracket and the
/// following key (`items[0]name` reads like `items[0].name`), leading and
/// doubled dots are skipped, and bracket content that is neither empty nor a
/// number is treated as a key. An empty expression parses to no segments,
/// which addresses the document root.
pub fn parse(path: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut key = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            '.' => flush_key(&mut segments, &mut key),
            '[' => {
                flush_key(&mut segments, &mut key);
                let mut inner = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    inner.push(c);
                }
                if closed || !inner.is_empty() {
                    segments.push(bracket_segment(&inner, closed));
                }
            }
            _ => key.push(c),
        }
    }
    flush_key(&mut segments, &mut key);
    segments
}

fn flush_key(segments: &mut Vec<Segment>, key: &mut String) {
    if !key.is_empty() {
        segments.push(Segment::Key(mem::take(key)));
    }
}

fn bracket_segment(inner: &str, closed: bool) -> Segment {
    if closed && inner.is_empty() {
        return Segment::Wildcard;
    }
    match inner.parse::<usize>() {
        Ok(index) => Segment::Index(index),
        Err(_) => Segment::Key(inner.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> Segment {
        Segment::Key(k.to_string())
    }

    #[test]
    fn test_parse_dotted_keys() {
        assert_eq!(parse("paper.title"), vec![key("paper"), key("title")]);
    }

    #[test]
    fn test_parse_single_key() {
        assert_eq!(parse("title"), vec![key("title")]);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(
            parse("authors[2].name"),
            vec![key("authors"), Segment::Index(2), key("name")]
        );
    }

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(
            parse("items[].id"),
            vec![key("items"), Segment::Wildcard, key("id")]
        );
    }

    #[test]
    fn test_parse_empty_is_root() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("."), vec![]);
    }

    #[test]
    fn test_parse_leading_and_doubled_dots() {
        assert_eq!(parse(".name"), vec![key("name")]);
        assert_eq!(parse("a..b"), vec![key("a"), key("b")]);
    }

    #[test]
    fn test_parse_missing_separator_after_bracket() {
        assert_eq!(
            parse("items[0]name"),
            vec![key("items"), Segment::Index(0), key("name")]
        );
    }

    #[test]
    fn test_parse_non_numeric_bracket_is_key() {
        assert_eq!(parse("a[b]"), vec![key("a"), key("b")]);
    }

    #[test]
    fn test_parse_unterminated_bracket() {
        assert_eq!(parse("a["), vec![key("a")]);
        assert_eq!(parse("a[1"), vec![key("a"), Segment::Index(1)]);
    }
}
