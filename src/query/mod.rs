//! Query system for ontology graphs
//!
//! Provides one-hop and transitive closure over a predicate, plus shared
//! ancestor lookup between two nodes.

mod ancestry;
mod closure;
mod types;

pub use ancestry::CommonAncestorQuery;
pub use closure::ClosureQuery;
pub use types::Direction;
