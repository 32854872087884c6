//! Storage backends for triples and terms
//!
//! Backends implement the `GraphStore` trait. `MemoryStore` is the default;
//! `SqliteStore` persists an ingested ontology to disk.

mod memory;
mod pattern;
mod sqlite;
mod traits;

pub use memory::MemoryStore;
pub use pattern::{Pattern, WILDCARD};
pub use sqlite::SqliteStore;
pub use traits::{GraphStore, OpenStore, StorageError, StorageResult};
