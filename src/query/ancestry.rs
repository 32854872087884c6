//! Common ancestors of two nodes

use crate::graph::IS_A;
use crate::storage::{GraphStore, Pattern, StorageResult};
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Query for the ancestors two nodes share
///
/// Each node counts as its own ancestor at distance zero, so if one node is
/// an ancestor of the other it is their nearest common ancestor.
#[derive(Debug, Clone)]
pub struct CommonAncestorQuery {
    pub first: String,
    pub second: String,
    /// Predicate to follow upwards
    pub predicate: Pattern,
}

impl CommonAncestorQuery {
    /// Create an `is_a` common-ancestor query between two nodes
    pub fn between(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            predicate: Pattern::exact(IS_A),
        }
    }

    pub fn predicate(mut self, predicate: impl Into<Pattern>) -> Self {
        self.predicate = predicate.into();
        self
    }

    /// All shared ancestors, nearest first
    ///
    /// Ordered by the sum of hop distances from both nodes; ties keep the
    /// breadth-first discovery order from `first`.
    pub fn execute<S: GraphStore + ?Sized>(&self, store: &S) -> StorageResult<Vec<String>> {
        let from_first = self.distances(store, &self.first)?;
        let from_second = self.distances(store, &self.second)?;

        let mut shared: Vec<(usize, usize, &String)> = from_first
            .iter()
            .enumerate()
            .filter_map(|(rank, (node, d1))| from_second.get(node).map(|d2| (d1 + d2, rank, node)))
            .collect();
        shared.sort_unstable();

        Ok(shared.into_iter().map(|(_, _, node)| node.clone()).collect())
    }

    /// The nearest shared ancestor, if any
    pub fn nearest<S: GraphStore + ?Sized>(&self, store: &S) -> StorageResult<Option<String>> {
        Ok(self.execute(store)?.into_iter().next())
    }

    /// BFS hop distance to every ancestor of `origin`, origin included
    fn distances<S: GraphStore + ?Sized>(
        &self,
        store: &S,
        origin: &str,
    ) -> StorageResult<IndexMap<String, usize>> {
        let mut distances = IndexMap::new();
        let mut queue = VecDeque::new();

        distances.insert(origin.to_string(), 0);
        queue.push_back((origin.to_string(), 0));

        while let Some((node, depth)) = queue.pop_front() {
            for parent in store.objects_where(&self.predicate, &Pattern::exact(node))? {
                if distances.contains_key(&parent) {
                    continue;
                }
                distances.insert(parent.clone(), depth + 1);
                queue.push_back((parent, depth + 1));
            }
        }

        Ok(distances)
    }
}
