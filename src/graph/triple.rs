//! Directed labeled edges

use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicate for subclass edges
pub const IS_A: &str = "is_a";

/// One `(subject, predicate, object)` edge
///
/// The whole triple is the identity: two triples with the same three
/// components are the same edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    pub fn is_a(subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self::new(subject, IS_A, object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}
