//! Finalized shortest-path results and their views.
//!
//! [`ShortestPaths`] is the externally visible outcome of the to-all
//! query: a monotonic map from vertex to its settled weight and path.
//! Entries are materialized on demand from the shared [`PathArena`];
//! the internal weight+chain pairs never leave the crate.

use std::collections::{HashMap, HashSet};

use crate::chain::{ChainIndex, PathArena};
use crate::store::VertexId;

/// A candidate or settled path: cumulative weight plus the chain tip.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WeightedNode {
    pub(crate) weight: f64,
    pub(crate) chain: ChainIndex,
}

/// A materialized result entry: settled weight and the forward path
/// from the source to the entry's vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    /// Cumulative edge-weight sum along `path`
    pub weight: f64,
    /// Vertex sequence from the source to the target, inclusive
    pub path: Vec<VertexId>,
}

/// Map of finalized shortest paths keyed by vertex.
///
/// Invariants: once present a key's entry never changes, and the query
/// source itself is never a key (paths to self are excluded by
/// construction).
#[derive(Debug, Default)]
pub struct ShortestPaths {
    arena: PathArena,
    entries: HashMap<VertexId, WeightedNode>,
}

impl ShortestPaths {
    pub(crate) fn new(arena: PathArena, entries: HashMap<VertexId, WeightedNode>) -> Self {
        Self { arena, entries }
    }

    /// Number of finalized vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no vertex was finalized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `vertex` has a finalized path.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.entries.contains_key(&vertex)
    }

    /// Settled weight of `vertex`, if finalized.
    pub fn weight(&self, vertex: VertexId) -> Option<f64> {
        self.entries.get(&vertex).map(|node| node.weight)
    }

    /// Forward path from the source to `vertex`, if finalized.
    pub fn path(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        self.entries
            .get(&vertex)
            .map(|node| self.arena.materialize(node.chain))
    }

    /// Materialized entry for `vertex`, if finalized.
    pub fn get(&self, vertex: VertexId) -> Option<WeightedPath> {
        self.entries.get(&vertex).map(|node| WeightedPath {
            weight: node.weight,
            path: self.arena.materialize(node.chain),
        })
    }

    /// Iterate materialized entries in ascending vertex-id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, WeightedPath)> + '_ {
        let mut keys: Vec<VertexId> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter().map(move |vertex| {
            let node = &self.entries[&vertex];
            (
                vertex,
                WeightedPath {
                    weight: node.weight,
                    path: self.arena.materialize(node.chain),
                },
            )
        })
    }

    /// Union of all result keys and every vertex on any result path.
    ///
    /// The source appears here (every path starts at it) even though it
    /// is never a key.
    pub fn vertices(&self) -> HashSet<VertexId> {
        let mut vertices: HashSet<VertexId> = self.entries.keys().copied().collect();
        for node in self.entries.values() {
            vertices.extend(self.arena.materialize(node.chain));
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: u64) -> VertexId {
        VertexId::from_raw(raw)
    }

    fn sample() -> ShortestPaths {
        // source 1, finalized 2 (via 1) and 3 (via 1 -> 2)
        let mut arena = PathArena::new();
        let root = arena.push(v(1), None);
        let two = arena.push(v(2), Some(root));
        let three = arena.push(v(3), Some(two));
        let mut entries = HashMap::new();
        entries.insert(
            v(2),
            WeightedNode {
                weight: 1.0,
                chain: two,
            },
        );
        entries.insert(
            v(3),
            WeightedNode {
                weight: 3.0,
                chain: three,
            },
        );
        ShortestPaths::new(arena, entries)
    }

    #[test]
    fn test_lookup_views() {
        let paths = sample();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(v(2)));
        assert!(!paths.contains(v(1)));
        assert_eq!(paths.weight(v(3)), Some(3.0));
        assert_eq!(paths.path(v(3)), Some(vec![v(1), v(2), v(3)]));
        assert_eq!(paths.get(v(4)), None);
    }

    #[test]
    fn test_iter_is_sorted_by_vertex() {
        let paths = sample();
        let order: Vec<VertexId> = paths.iter().map(|(vertex, _)| vertex).collect();
        assert_eq!(order, vec![v(2), v(3)]);
    }

    #[test]
    fn test_vertices_union_includes_source() {
        let paths = sample();
        let vertices = paths.vertices();
        assert_eq!(vertices.len(), 3);
        assert!(vertices.contains(&v(1))); // source, via paths only
        assert!(vertices.contains(&v(2)));
        assert!(vertices.contains(&v(3)));
    }

    #[test]
    fn test_empty() {
        let paths = ShortestPaths::default();
        assert!(paths.is_empty());
        assert!(paths.vertices().is_empty());
        assert_eq!(paths.iter().count(), 0);
    }
}
