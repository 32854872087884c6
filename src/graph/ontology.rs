//! Ontology: the main entry point for ingestion and queries

use super::builder::{GraphBuilder, IngestStats};
use super::term::Term;
use super::triple::IS_A;
use crate::parser::{ParseError, ParserOptions, StanzaParser};
use crate::query::{ClosureQuery, CommonAncestorQuery, Direction};
use crate::storage::{GraphStore, MemoryStore, Pattern, StorageError};
use std::collections::BTreeSet;
use std::io::BufRead;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur in ontology operations
#[derive(Debug, Error)]
pub enum OboError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Malformed relationship {value:?} in stanza {subject}")]
    MalformedRelationship { subject: String, value: String },
}

/// Result type for ontology operations
pub type OboResult<T> = Result<T, OboError>;

/// An ontology backed by a triple store
///
/// Owns its store. Ingest first with [`Ontology::load`], then query; the
/// store is not meant to be written and read concurrently.
///
/// ```
/// use obograph::Ontology;
///
/// let obo = "[Term]\nid: GO:2\nname: two\ndef: d\nis_a: GO:1 ! one\n";
/// let ontology = Ontology::from_reader(obo.as_bytes()).unwrap();
/// assert_eq!(ontology.find_parents("GO:2", false).unwrap(), vec!["GO:1"]);
/// ```
#[derive(Debug, Default)]
pub struct Ontology<S = MemoryStore> {
    store: S,
}

impl Ontology<MemoryStore> {
    /// Create an empty in-memory ontology
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Parse a whole source into a new in-memory ontology
    pub fn from_reader<R: BufRead>(reader: R) -> OboResult<Self> {
        let mut ontology = Self::new();
        ontology.load(reader)?;
        Ok(ontology)
    }
}

impl<S: GraphStore> Ontology<S> {
    /// Wrap an existing store, which may already hold an ingested ontology
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Ingest an OBO source with default parser options
    pub fn load<R: BufRead>(&mut self, reader: R) -> OboResult<IngestStats> {
        self.load_with(reader, ParserOptions::default())
    }

    /// Ingest an OBO source
    ///
    /// Runs as one store batch: if parsing, building or the commit fails,
    /// nothing from this source is kept.
    pub fn load_with<R: BufRead>(&mut self, reader: R, options: ParserOptions) -> OboResult<IngestStats> {
        self.store.begin_batch()?;
        let result = self.ingest(reader, options).and_then(|stats| {
            self.store.commit_batch()?;
            Ok(stats)
        });
        match result {
            Ok(stats) => {
                info!(
                    stanzas = stats.stanzas,
                    terms = stats.terms,
                    triples = stats.triples,
                    obsolete = stats.obsolete,
                    "ingested ontology"
                );
                Ok(stats)
            }
            Err(e) => {
                if let Err(rollback) = self.store.rollback_batch() {
                    warn!(error = %rollback, "rollback after failed ingestion failed");
                }
                Err(e)
            }
        }
    }

    fn ingest<R: BufRead>(&mut self, reader: R, options: ParserOptions) -> OboResult<IngestStats> {
        let mut builder = GraphBuilder::new(&mut self.store);
        for stanza in StanzaParser::with_options(reader, options) {
            builder.add_stanza(&stanza?)?;
        }
        Ok(builder.finish())
    }

    /// Get a registered term by id
    pub fn get(&self, id: &str) -> OboResult<Option<Term>> {
        Ok(self.store.load_term(id)?)
    }

    /// Children of `id` through `is_a`; every descendant when `expand` is set
    pub fn find_children(&self, id: &str, expand: bool) -> OboResult<Vec<String>> {
        self.query(id, IS_A, Direction::Descend, expand)
    }

    /// Parents of `id` through `is_a`; every ancestor when `expand` is set
    pub fn find_parents(&self, id: &str, expand: bool) -> OboResult<Vec<String>> {
        self.query(id, IS_A, Direction::Ascend, expand)
    }

    /// Closure of `id` over an arbitrary predicate (`*` globs allowed)
    pub fn query(
        &self,
        id: &str,
        predicate: impl Into<Pattern>,
        direction: Direction,
        expand: bool,
    ) -> OboResult<Vec<String>> {
        let query = ClosureQuery::from(id)
            .predicate(predicate)
            .direction(direction)
            .expand(expand);
        Ok(query.execute(&self.store)?)
    }

    /// Ancestors shared by two nodes, nearest first
    pub fn common_ancestors(
        &self,
        first: &str,
        second: &str,
        predicate: impl Into<Pattern>,
    ) -> OboResult<Vec<String>> {
        let query = CommonAncestorQuery::between(first, second).predicate(predicate);
        Ok(query.execute(&self.store)?)
    }

    /// The nearest ancestor shared by two nodes
    pub fn most_recent_common_ancestor(
        &self,
        first: &str,
        second: &str,
        predicate: impl Into<Pattern>,
    ) -> OboResult<Option<String>> {
        let query = CommonAncestorQuery::between(first, second).predicate(predicate);
        Ok(query.nearest(&self.store)?)
    }

    /// Every predicate present in the graph
    pub fn relationships(&self) -> OboResult<BTreeSet<String>> {
        Ok(self.store.distinct_predicates()?)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
