//! Transitive closure over a single predicate

use super::types::Direction;
use crate::graph::IS_A;
use crate::storage::{GraphStore, Pattern, StorageResult};
use indexmap::IndexSet;

/// Query for the ancestors or descendants of a node
#[derive(Debug, Clone)]
pub struct ClosureQuery {
    /// Starting node ID
    pub origin: String,
    /// Predicate to follow; a `*` glob follows several at once
    pub predicate: Pattern,
    /// Direction to traverse triples
    pub direction: Direction,
    /// Follow neighbours transitively instead of stopping after one hop
    pub expand: bool,
}

impl ClosureQuery {
    /// Create a one-hop `is_a` descendant query from a starting node
    pub fn from(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            predicate: Pattern::exact(IS_A),
            direction: Direction::Descend,
            expand: false,
        }
    }

    /// Set the predicate to follow
    pub fn predicate(mut self, predicate: impl Into<Pattern>) -> Self {
        self.predicate = predicate.into();
        self
    }

    /// Set the traversal direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set whether to expand transitively
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Execute the query against a store
    ///
    /// Results are duplicate-free and keep first-seen order. The expanded
    /// form is a depth-first pre-order walk driven by an explicit stack, so
    /// cycles and very deep ontologies are both safe. The origin only shows
    /// up in its own closure when a cycle leads back to it.
    pub fn execute<S: GraphStore + ?Sized>(&self, store: &S) -> StorageResult<Vec<String>> {
        let direct = self.neighbors(store, &self.origin)?;
        if !self.expand {
            let unique: IndexSet<String> = direct.into_iter().collect();
            return Ok(unique.into_iter().collect());
        }

        let mut seen: IndexSet<String> = IndexSet::new();
        let mut stack: Vec<String> = direct.into_iter().rev().collect();

        while let Some(node) = stack.pop() {
            if !seen.insert(node.clone()) {
                continue;
            }
            // The origin's neighbours were pushed up front
            if node == self.origin {
                continue;
            }

            let next = self.neighbors(store, &node)?;
            stack.extend(next.into_iter().rev().filter(|n| !seen.contains(n)));
        }

        Ok(seen.into_iter().collect())
    }

    /// One-hop neighbours in the configured direction
    fn neighbors<S: GraphStore + ?Sized>(&self, store: &S, node: &str) -> StorageResult<Vec<String>> {
        let node = Pattern::exact(node);
        match self.direction {
            Direction::Descend => store.subjects_where(&self.predicate, &node),
            Direction::Ascend => store.objects_where(&self.predicate, &node),
        }
    }
}
