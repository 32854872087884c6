//! Core ontology data structures and ingestion

mod builder;
mod ontology;
mod term;
mod triple;

#[cfg(test)]
mod tests;

pub use builder::{GraphBuilder, IngestStats};
pub use ontology::{OboError, OboResult, Ontology};
pub use term::Term;
pub use triple::{Triple, IS_A};
