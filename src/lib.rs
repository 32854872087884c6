//! obograph: OBO ontology parsing and relationship closure
//!
//! Streams OBO stanza files into a triple store and answers ancestor and
//! descendant queries over `is_a` or any other named predicate.
//!
//! # Core Concepts
//!
//! - **Stanzas**: raw `key: value` blocks, one per term
//! - **Terms**: stanzas with `id`, `name` and `def` that are not obsolete
//! - **Triples**: `(subject, predicate, object)` edges from `is_a` and `relationship`
//! - **Closure**: one-hop or transitive neighbours along a single predicate
//!
//! # Example
//!
//! ```
//! use obograph::Ontology;
//!
//! let obo = "\
//! [Term]
//! id: GO:0006810
//! name: transport
//! def: \"The directed movement of substances.\" [GOC:dos]
//!
//! [Term]
//! id: GO:0055085
//! name: transmembrane transport
//! def: \"Transport across a membrane.\" [GOC:jid]
//! is_a: GO:0006810 ! transport
//! ";
//!
//! let ontology = Ontology::from_reader(obo.as_bytes()).unwrap();
//! assert_eq!(ontology.find_children("GO:0006810", false).unwrap(), vec!["GO:0055085"]);
//! ```

mod graph;
pub mod parser;
pub mod query;
pub mod storage;

pub use graph::{GraphBuilder, IngestStats, OboError, OboResult, Ontology, Term, Triple, IS_A};
pub use parser::{ParseError, ParseResult, ParserOptions, Stanza, StanzaParser};
pub use query::{ClosureQuery, CommonAncestorQuery, Direction};
pub use storage::{GraphStore, MemoryStore, OpenStore, Pattern, SqliteStore, StorageError, StorageResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
