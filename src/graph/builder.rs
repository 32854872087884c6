//! GraphBuilder: turns stanzas into terms and triples

use super::ontology::{OboError, OboResult};
use super::term::Term;
use super::triple::Triple;
use crate::parser::{parse_relationship, Stanza};
use crate::storage::GraphStore;
use serde::Serialize;
use tracing::debug;

/// Counters collected while ingesting one source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Stanzas seen
    pub stanzas: usize,
    /// Terms registered
    pub terms: usize,
    /// Triples newly added (re-inserted triples are not counted)
    pub triples: usize,
    /// Stanzas skipped as obsolete
    pub obsolete: usize,
    /// Stanzas skipped for lacking an `id`
    pub anonymous: usize,
}

/// Writes stanzas into a store
///
/// Obsolete stanzas contribute nothing. Every other stanza with an `id`
/// contributes its `is_a` and `relationship` triples, and becomes a term
/// when it also has `name` and `def`. Triples may point at ids that never
/// become terms.
pub struct GraphBuilder<'a, S: GraphStore + ?Sized> {
    store: &'a mut S,
    stats: IngestStats,
}

impl<'a, S: GraphStore + ?Sized> GraphBuilder<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            stats: IngestStats::default(),
        }
    }

    pub fn add_stanza(&mut self, stanza: &Stanza) -> OboResult<()> {
        self.stats.stanzas += 1;

        let Some(id) = stanza.id() else {
            self.stats.anonymous += 1;
            debug!("skipping stanza without id");
            return Ok(());
        };

        if stanza.is_obsolete() {
            self.stats.obsolete += 1;
            debug!(id, "skipping obsolete stanza");
            return Ok(());
        }

        match Term::from_stanza(stanza) {
            Some(term) => {
                self.store.save_term(&term)?;
                self.stats.terms += 1;
            }
            None => debug!(id, "stanza lacks name or def, not registered as a term"),
        }

        for parent in stanza.is_a() {
            self.insert(Triple::is_a(id, parent.as_str()))?;
        }

        for raw in stanza.relationships() {
            let (predicate, target) =
                parse_relationship(raw).map_err(|_| OboError::MalformedRelationship {
                    subject: id.to_string(),
                    value: raw.clone(),
                })?;
            self.insert(Triple::new(id, predicate, target))?;
        }

        Ok(())
    }

    fn insert(&mut self, triple: Triple) -> OboResult<()> {
        if self.store.insert_triple(&triple)? {
            self.stats.triples += 1;
        }
        Ok(())
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    pub fn finish(self) -> IngestStats {
        self.stats
    }
}
