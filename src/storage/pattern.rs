//! Exact and wildcard matching for triple lookups

use std::fmt;

/// Wildcard character: matches any substring, including the empty one
pub const WILDCARD: char = '*';

/// A value to match a triple component against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Matches only the identical string
    Exact(String),
    /// `*`-glob
    Glob(String),
}

impl Pattern {
    /// Parse a pattern, treating any `*` as a wildcard
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.contains(WILDCARD) {
            Pattern::Glob(text)
        } else {
            Pattern::Exact(text)
        }
    }

    /// A pattern that never treats `*` specially
    pub fn exact(text: impl Into<String>) -> Self {
        Pattern::Exact(text.into())
    }

    /// Matches everything
    pub fn any() -> Self {
        Pattern::Glob(WILDCARD.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Exact(text) | Pattern::Glob(text) => text,
        }
    }

    /// The literal value when this is an exact pattern
    pub fn as_exact(&self) -> Option<&str> {
        match self {
            Pattern::Exact(text) => Some(text),
            Pattern::Glob(_) => None,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Exact(expected) => expected == text,
            Pattern::Glob(glob) => glob_matches(glob, text),
        }
    }

    /// Render as an SQLite `GLOB` operand
    ///
    /// `?` and `[` are bracketed so only `*` keeps its wildcard meaning.
    pub(crate) fn to_sql_glob(&self) -> String {
        let mut out = String::with_capacity(self.as_str().len());
        for c in self.as_str().chars() {
            match c {
                '?' => out.push_str("[?]"),
                '[' => out.push_str("[[]"),
                _ => out.push(c),
            }
        }
        out
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::new(text)
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::new(text)
    }
}

impl From<&String> for Pattern {
    fn from(text: &String) -> Self {
        Pattern::new(text.as_str())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Leftmost matching of `*`-separated segments
fn glob_matches(glob: &str, text: &str) -> bool {
    let mut segments = glob.split(WILDCARD);
    let first = segments.next().unwrap_or("");
    let Some(mut rest) = text.strip_prefix(first) else {
        return false;
    };

    let mut segments: Vec<&str> = segments.collect();
    let Some(last) = segments.pop() else {
        // No wildcard at all
        return rest.is_empty();
    };

    for segment in segments {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_detects_wildcard() {
        assert_eq!(Pattern::new("is_a"), Pattern::Exact("is_a".into()));
        assert_eq!(Pattern::new("part_*"), Pattern::Glob("part_*".into()));
        assert_eq!(Pattern::exact("a*b").as_exact(), Some("a*b"));
    }

    #[test]
    fn test_exact_match() {
        let pattern = Pattern::new("is_a");
        assert!(pattern.matches("is_a"));
        assert!(!pattern.matches("is_about"));
    }

    #[test]
    fn test_glob_match() {
        assert!(Pattern::any().matches(""));
        assert!(Pattern::any().matches("part_of"));
        assert!(Pattern::new("part_*").matches("part_of"));
        assert!(Pattern::new("*regulates").matches("negatively_regulates"));
        assert!(Pattern::new("*_of").matches("part_of"));
        assert!(!Pattern::new("*_of").matches("has_part"));
        assert!(Pattern::new("GO:*:*").matches("GO:x:y"));
        assert!(!Pattern::new("a*a").matches("a"));
        assert!(Pattern::new("a*a").matches("aa"));
        assert!(Pattern::new("*reg*").matches("positively_regulates"));
    }

    #[test]
    fn test_sql_glob_escapes_metacharacters() {
        assert_eq!(Pattern::new("a?[b]*").to_sql_glob(), "a[?][[]b]*");
    }
}
