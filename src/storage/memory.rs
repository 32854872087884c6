//! In-memory storage backend

use super::pattern::Pattern;
use super::traits::{GraphStore, StorageResult};
use crate::graph::{Term, Triple};
use indexmap::IndexSet;
use std::collections::{BTreeSet, HashMap};

/// node -> (predicate, neighbour) pairs, in insertion order
type Adjacency = HashMap<String, Vec<(String, String)>>;

/// Undo log for the open batch
#[derive(Debug, Default)]
struct Batch {
    /// Triple count when the batch began
    triples: usize,
    /// Term values before their first write in this batch
    terms: HashMap<String, Option<Term>>,
}

/// Triple store held entirely in memory
///
/// Keeps the triples in insertion order plus two adjacency indices
/// (object -> subjects, subject -> objects), each entry tagged with its
/// predicate. Lookups with an exact node walk that node's edges and filter
/// them by the predicate pattern; only a wildcard node scans the triples.
///
/// Batches are undoable: a rollback drops every triple and term written
/// since `begin_batch`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    triples: IndexSet<Triple>,
    by_object: Adjacency,
    by_subject: Adjacency,
    terms: HashMap<String, Term>,
    batch: Option<Batch>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All triples in insertion order
    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    fn neighbours(index: &Adjacency, predicate: &Pattern, node: &str) -> Vec<String> {
        index
            .get(node)
            .map(|edges| {
                edges
                    .iter()
                    .filter(|(p, _)| predicate.matches(p))
                    .map(|(_, n)| n.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn unlink(index: &mut Adjacency, node: &str) {
        if let Some(edges) = index.get_mut(node) {
            edges.pop();
            if edges.is_empty() {
                index.remove(node);
            }
        }
    }
}

impl GraphStore for MemoryStore {
    fn save_term(&mut self, term: &Term) -> StorageResult<()> {
        let previous = self.terms.insert(term.id.clone(), term.clone());
        if let Some(batch) = &mut self.batch {
            batch.terms.entry(term.id.clone()).or_insert(previous);
        }
        Ok(())
    }

    fn load_term(&self, id: &str) -> StorageResult<Option<Term>> {
        Ok(self.terms.get(id).cloned())
    }

    fn term_count(&self) -> StorageResult<usize> {
        Ok(self.terms.len())
    }

    fn insert_triple(&mut self, triple: &Triple) -> StorageResult<bool> {
        if self.triples.contains(triple) {
            return Ok(false);
        }

        self.by_object
            .entry(triple.object.clone())
            .or_default()
            .push((triple.predicate.clone(), triple.subject.clone()));
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push((triple.predicate.clone(), triple.object.clone()));
        self.triples.insert(triple.clone());

        Ok(true)
    }

    fn subjects_where(&self, predicate: &Pattern, object: &Pattern) -> StorageResult<Vec<String>> {
        if let Some(o) = object.as_exact() {
            return Ok(Self::neighbours(&self.by_object, predicate, o));
        }
        Ok(self
            .triples
            .iter()
            .filter(|t| predicate.matches(&t.predicate) && object.matches(&t.object))
            .map(|t| t.subject.clone())
            .collect())
    }

    fn objects_where(&self, predicate: &Pattern, subject: &Pattern) -> StorageResult<Vec<String>> {
        if let Some(s) = subject.as_exact() {
            return Ok(Self::neighbours(&self.by_subject, predicate, s));
        }
        Ok(self
            .triples
            .iter()
            .filter(|t| predicate.matches(&t.predicate) && subject.matches(&t.subject))
            .map(|t| t.object.clone())
            .collect())
    }

    fn distinct_predicates(&self) -> StorageResult<BTreeSet<String>> {
        Ok(self.triples.iter().map(|t| t.predicate.clone()).collect())
    }

    fn triple_count(&self) -> StorageResult<usize> {
        Ok(self.triples.len())
    }

    fn begin_batch(&mut self) -> StorageResult<()> {
        self.batch = Some(Batch {
            triples: self.triples.len(),
            terms: HashMap::new(),
        });
        Ok(())
    }

    fn commit_batch(&mut self) -> StorageResult<()> {
        self.batch = None;
        Ok(())
    }

    fn rollback_batch(&mut self) -> StorageResult<()> {
        let Some(batch) = self.batch.take() else {
            return Ok(());
        };

        // Newer edges sit at the tail of every adjacency list
        while self.triples.len() > batch.triples {
            let Some(triple) = self.triples.pop() else { break };
            Self::unlink(&mut self.by_object, &triple.object);
            Self::unlink(&mut self.by_subject, &triple.subject);
        }

        for (id, previous) in batch.terms {
            match previous {
                Some(term) => self.terms.insert(id, term),
                None => self.terms.remove(&id),
            };
        }
        Ok(())
    }
}
