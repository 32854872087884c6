//! Decoding of `relationship` values

use super::{ParseError, ParseResult};

const COMMENT_MARKER: &str = " ! ";

/// Remove a trailing ` ! comment` from a value
///
/// Only a bang with whitespace on both sides opens a comment, so values
/// such as `GO!thing` come back untouched.
pub fn strip_comment(value: &str) -> &str {
    match value.find(COMMENT_MARKER) {
        Some(pos) => value[..pos].trim(),
        None => value,
    }
}

/// Split a raw `relationship` value into `(predicate, target)`
///
/// `"part_of GO:0001234 ! some go term"` yields `("part_of", "GO:0001234")`.
/// The split happens on the first whitespace run; anything after the target
/// (trailing qualifiers, for instance) stays part of the target.
pub fn parse_relationship(raw: &str) -> ParseResult<(&str, &str)> {
    let value = strip_comment(raw).trim();
    let malformed = || ParseError::MalformedRelationship(raw.to_string());

    let (predicate, target) = value.split_once(char::is_whitespace).ok_or_else(malformed)?;
    let target = target.trim();
    if predicate.is_empty() || target.is_empty() {
        return Err(malformed());
    }

    Ok((predicate, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("GO:0006810 ! transport"), "GO:0006810");
        assert_eq!(strip_comment("GO:0006810"), "GO:0006810");
    }

    #[test]
    fn test_strip_comment_keeps_embedded_bang() {
        assert_eq!(strip_comment("GO!thing"), "GO!thing");
        assert_eq!(strip_comment("a! b"), "a! b");
        assert_eq!(strip_comment("GO!thing ! note"), "GO!thing");
    }

    #[test]
    fn test_parse_relationship_with_comment() {
        let (predicate, target) =
            parse_relationship("part_of GO:0001234 ! some go term").unwrap();
        assert_eq!(predicate, "part_of");
        assert_eq!(target, "GO:0001234");
    }

    #[test]
    fn test_parse_relationship_collapses_whitespace_run() {
        let (predicate, target) = parse_relationship("regulates \t  GO:0008150  ").unwrap();
        assert_eq!(predicate, "regulates");
        assert_eq!(target, "GO:0008150");
    }

    #[test]
    fn test_parse_relationship_without_target() {
        let err = parse_relationship("part_of").unwrap_err();
        assert!(matches!(err, ParseError::MalformedRelationship(ref raw) if raw == "part_of"));

        assert!(parse_relationship("part_of ! dangling").is_err());
        assert!(parse_relationship("").is_err());
    }
}
