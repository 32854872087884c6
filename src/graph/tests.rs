//! Serialization tests for records handed to the CLI and storage layers

use serde_json::{json, Value};

/// Fixture: a fully populated term
fn term_fixture() -> Value {
    json!({
        "id": "GO:0006810",
        "name": "transport",
        "def": "\"The directed movement of substances.\" [GOC:dos]",
        "comment": "Grouping class.",
        "synonyms": ["\"transport accessory protein activity\" RELATED []"]
    })
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use crate::graph::{IngestStats, Term, Triple};
    use crate::parser::{ParseResult, Stanza, StanzaParser};
    use crate::query::Direction;

    #[test]
    fn term_round_trips_through_fixture() {
        let term: Term = serde_json::from_value(term_fixture()).unwrap();
        assert_eq!(term.id, "GO:0006810");
        assert_eq!(term.synonyms.len(), 1);

        assert_eq!(serde_json::to_value(&term).unwrap(), term_fixture());
    }

    #[test]
    fn term_omits_empty_optional_fields() {
        let term = Term::new("GO:1", "one", "d");
        let json = serde_json::to_value(&term).unwrap();

        assert_eq!(json, json!({"id": "GO:1", "name": "one", "def": "d"}));
    }

    #[test]
    fn term_deserializes_without_optional_fields() {
        let term: Term = serde_json::from_value(json!({"id": "GO:1", "name": "one", "def": "d"})).unwrap();
        assert_eq!(term.comment, None);
        assert!(term.synonyms.is_empty());
    }

    #[test]
    fn triple_serializes_as_named_fields() {
        let json = serde_json::to_value(Triple::new("GO:2", "part_of", "GO:1")).unwrap();
        assert_eq!(json, json!({"subject": "GO:2", "predicate": "part_of", "object": "GO:1"}));
    }

    #[test]
    fn stanza_serializes_scalars_and_lists() {
        let stanzas = StanzaParser::new("id: GO:2\nname: two\nis_a: GO:1\n".as_bytes())
            .collect::<ParseResult<Vec<Stanza>>>()
            .unwrap();
        let json = serde_json::to_value(&stanzas[0]).unwrap();

        assert_eq!(
            json,
            json!({"id": "GO:2", "name": "two", "is_a": ["GO:1"], "relationship": []})
        );
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Ascend).unwrap(), "\"ascend\"");
        let parsed: Direction = serde_json::from_str("\"descend\"").unwrap();
        assert_eq!(parsed, Direction::Descend);
    }

    #[test]
    fn ingest_stats_serialize() {
        let json = serde_json::to_value(IngestStats::default()).unwrap();
        assert_eq!(json["triples"], 0);
        assert_eq!(json["anonymous"], 0);
    }
}
