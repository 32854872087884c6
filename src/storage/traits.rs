//! Storage trait definitions

use super::pattern::Pattern;
use crate::graph::{Term, Triple};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for triple storage backends
///
/// Stores hold the term registry and the triple set. Writes happen during
/// ingestion only; queries run afterwards against a read-only store.
/// Lookups return values in triple insertion order.
pub trait GraphStore {
    // === Term Operations ===

    /// Register a term, replacing any term with the same id
    fn save_term(&mut self, term: &Term) -> StorageResult<()>;

    /// Load a term by id
    fn load_term(&self, id: &str) -> StorageResult<Option<Term>>;

    fn term_count(&self) -> StorageResult<usize>;

    // === Triple Operations ===

    /// Insert a triple
    ///
    /// Returns `false` when the identical triple is already stored; the
    /// existing triple keeps its position.
    fn insert_triple(&mut self, triple: &Triple) -> StorageResult<bool>;

    /// Subjects of triples whose predicate and object match
    fn subjects_where(&self, predicate: &Pattern, object: &Pattern) -> StorageResult<Vec<String>>;

    /// Objects of triples whose predicate and subject match
    fn objects_where(&self, predicate: &Pattern, subject: &Pattern) -> StorageResult<Vec<String>>;

    /// Every predicate present in the graph
    fn distinct_predicates(&self) -> StorageResult<BTreeSet<String>>;

    fn triple_count(&self) -> StorageResult<usize>;

    // === Batching ===

    /// Start a bulk write; stores without transactions ignore this
    fn begin_batch(&mut self) -> StorageResult<()> {
        Ok(())
    }

    fn commit_batch(&mut self) -> StorageResult<()> {
        Ok(())
    }

    fn rollback_batch(&mut self) -> StorageResult<()> {
        Ok(())
    }
}

/// Extension trait for opening stores from paths
pub trait OpenStore: GraphStore + Sized {
    /// Open or create a store at the given path
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StorageResult<Self>;
}
