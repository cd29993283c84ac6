//! Block end matching for skipped bodies

use super::scan::{Directive, DirectiveKind};

/// Find the end marker that closes a skipped block
///
/// Returns the index of the first directive after `from` whose kind matches
/// and whose payload is `end`. Matching is kind-aware with no depth counting:
/// an `{e:end}` never closes a loop, but a same-kind block nested inside the
/// skipped body will be cut short at its inner end marker.
pub fn skip_to_matching_end(
    directives: &[Directive],
    kind: DirectiveKind,
    from: usize,
) -> Option<usize> {
    directives
        .iter()
        .enumerate()
        .skip(from + 1)
        .find(|(_, d)| d.kind == kind && d.is_end_marker())
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::scan::scan_directives;

    #[test]
    fn test_finds_same_kind_end() {
        let directives = scan_directives("{l:items[]}{v:.name}{l:end}");
        assert_eq!(
            skip_to_matching_end(&directives, DirectiveKind::Loop, 0),
            Some(2)
        );
    }

    #[test]
    fn test_ignores_other_kind_ends() {
        let directives = scan_directives("{e:a b}{l:items[]}{l:end}{e:end}");
        assert_eq!(
            skip_to_matching_end(&directives, DirectiveKind::Equals, 0),
            Some(3)
        );
    }

    #[test]
    fn test_missing_end_is_none() {
        let directives = scan_directives("{l:items[]}{v:.name}");
        assert_eq!(skip_to_matching_end(&directives, DirectiveKind::Loop, 0), None);
    }

    #[test]
    fn test_nested_same_kind_takes_first_end() {
        let directives = scan_directives("{l:outer[]}{l:.inner[]}{l:end}{l:end}");
        assert_eq!(
            skip_to_matching_end(&directives, DirectiveKind::Loop, 0),
            Some(2)
        );
    }

    #[test]
    fn test_search_starts_after_from() {
        let directives = scan_directives("{l:end}{l:items[]}{l:end}");
        assert_eq!(
            skip_to_matching_end(&directives, DirectiveKind::Loop, 1),
            Some(2)
        );
    }
}
