//! Term representation in the ontology

use crate::parser::Stanza;
use serde::{Deserialize, Serialize};

/// A validated, non-obsolete ontology term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Identifier (e.g., "GO:0006810")
    pub id: String,
    /// Human-readable label
    pub name: String,
    /// Definition text, including its trailing dbxref list
    pub def: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

impl Term {
    pub fn new(id: impl Into<String>, name: impl Into<String>, def: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            def: def.into(),
            comment: None,
            synonyms: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonyms.push(synonym.into());
        self
    }

    /// Build a term from a stanza
    ///
    /// Returns `None` unless `id`, `name` and `def` are all present and the
    /// stanza is not obsolete. A repeated `name` or `def` contributes its
    /// first value.
    pub fn from_stanza(stanza: &Stanza) -> Option<Self> {
        if stanza.is_obsolete() {
            return None;
        }

        let mut term = Term::new(stanza.id()?, stanza.scalar("name")?, stanza.scalar("def")?);
        term.comment = stanza.scalar("comment").map(str::to_string);
        term.synonyms = stanza.values("synonym").to_vec();
        Some(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseResult, StanzaParser};

    fn stanza(text: &str) -> Stanza {
        StanzaParser::new(text.as_bytes())
            .collect::<ParseResult<Vec<_>>>()
            .unwrap()
            .remove(0)
    }

    #[test]
    fn test_from_complete_stanza() {
        let term = Term::from_stanza(&stanza(
            "id: GO:0006810\nname: transport\ndef: \"Movement.\" [GOC:dos]\ncomment: Broad.\nsynonym: \"a\" EXACT []\nsynonym: \"b\" RELATED []\n",
        ))
        .unwrap();

        assert_eq!(term.id, "GO:0006810");
        assert_eq!(term.name, "transport");
        assert_eq!(term.def, "\"Movement.\" [GOC:dos]");
        assert_eq!(term.comment.as_deref(), Some("Broad."));
        assert_eq!(term.synonyms, vec!["\"a\" EXACT []", "\"b\" RELATED []"]);
    }

    #[test]
    fn test_missing_required_field() {
        assert!(Term::from_stanza(&stanza("id: GO:1\nname: one\n")).is_none());
        assert!(Term::from_stanza(&stanza("id: GO:1\ndef: d\n")).is_none());
    }

    #[test]
    fn test_obsolete_stanza() {
        let obsolete = stanza("id: GO:1\nname: one\ndef: d\nis_obsolete: true\n");
        assert!(Term::from_stanza(&obsolete).is_none());
    }
}
