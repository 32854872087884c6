//! OBO stanza parsing
//!
//! Converts a raw line stream into stanza records and decodes the
//! `relationship` field values those stanzas carry.

mod relationship;
mod stanza;

pub use relationship::{parse_relationship, strip_comment};
pub use stanza::{FieldValue, ParserOptions, Stanza, StanzaParser, MULTIVALUE_FIELDS};

use thiserror::Error;

/// Errors that can occur while parsing OBO text
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed relationship: {0:?}")]
    MalformedRelationship(String),
}

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;
