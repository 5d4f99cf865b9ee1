//! The frontier expansion engine.
//!
//! A [`Traverser`] advances a batched Dijkstra round by round: every
//! frontier vertex's edges are sampled, candidate weights relax the
//! tentative map under keep-the-smaller-weight, and the tie group at
//! the round minimum is promoted into the finalized map, becoming the
//! next frontier. With non-negative weights no promoted entry can ever
//! be improved by a longer path, so finalized weights are settled.
//!
//! One engine instance owns all traversal state for exactly one query;
//! nothing here is shared across queries or threads. Edge fetches fan
//! out across the frontier within a round and fan back in before any
//! tentative-map write: the merge rule is commutative, and promotion
//! only runs after the whole round's scan.

use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::chain::PathArena;
use crate::error::SpantreeResult;
use crate::paths::{ShortestPaths, WeightedNode};
use crate::query::QueryOptions;
use crate::sampler::NeighborSampler;
use crate::store::{Direction, Edge, GraphStore, LabelId, VertexId};

/// Round-based single-source shortest-path traversal state.
pub struct Traverser<'g, G: GraphStore> {
    store: &'g G,
    source: VertexId,
    direction: Direction,
    label: Option<LabelId>,
    weight_property: Option<String>,
    sampler: NeighborSampler,
    limit: Option<u64>,
    arena: PathArena,
    frontier: Vec<(VertexId, WeightedNode)>,
    tentative: HashMap<VertexId, WeightedNode>,
    finalized: HashMap<VertexId, WeightedNode>,
    rounds: u64,
    done: bool,
}

impl<'g, G: GraphStore> Traverser<'g, G> {
    /// Seed an engine with the source vertex at weight 0.
    ///
    /// `label` is the store-resolved form of `options.label`; `limit`
    /// is passed explicitly because the single-target query runs
    /// without one regardless of the configured options.
    pub fn new(
        store: &'g G,
        options: &QueryOptions,
        label: Option<LabelId>,
        limit: Option<u64>,
    ) -> Self {
        let mut arena = PathArena::new();
        let root = arena.push(options.source, None);
        let seed = WeightedNode {
            weight: 0.0,
            chain: root,
        };
        Self {
            store,
            source: options.source,
            direction: options.direction,
            label,
            weight_property: options.weight_property.clone(),
            sampler: NeighborSampler::new(options.degree, options.skip_degree),
            limit,
            arena,
            frontier: vec![(options.source, seed)],
            tentative: HashMap::new(),
            finalized: HashMap::new(),
            rounds: 0,
            done: false,
        }
    }

    /// Whether no further round can finalize anything.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether `vertex` already has a settled shortest path.
    pub fn is_finalized(&self, vertex: VertexId) -> bool {
        self.finalized.contains_key(&vertex)
    }

    /// Number of finalized vertices so far.
    pub fn finalized_count(&self) -> usize {
        self.finalized.len()
    }

    /// Rounds advanced so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Search-space size: finalized entries plus live tentative entries.
    ///
    /// This is the quantity the capacity bound is checked against.
    pub fn explored(&self) -> u64 {
        (self.finalized.len() + self.tentative.len()) as u64
    }

    /// Consume the engine, yielding the finalized map.
    pub fn into_paths(self) -> ShortestPaths {
        ShortestPaths::new(self.arena, self.finalized)
    }

    /// Run one expansion round.
    ///
    /// A no-op once the engine is done. Store failures abort the round
    /// with no promotion; tentative writes from the partial scan are
    /// discarded along with the whole query by the caller.
    pub fn advance(&mut self) -> SpantreeResult<()>
    where
        G: Sync,
    {
        if self.done {
            return Ok(());
        }
        self.rounds += 1;
        debug!(
            round = self.rounds,
            frontier = self.frontier.len(),
            tentative = self.tentative.len(),
            "expansion round"
        );

        // Fan out edge fetches across the frontier, fan in before any
        // tentative-map write.
        let fetched: Vec<(VertexId, WeightedNode, Vec<Edge>)> = self
            .frontier
            .par_iter()
            .map(|(vertex, node)| {
                self.sampler
                    .sample(self.store, *vertex, self.direction, self.label)
                    .map(|edges| (*vertex, *node, edges))
            })
            .collect::<SpantreeResult<_>>()?;

        for (vertex, node, edges) in fetched {
            for edge in edges {
                let neighbor = edge.other_end(vertex);
                // Settled vertices never re-enter, and paths never loop
                // back to the source.
                if neighbor == self.source || self.finalized.contains_key(&neighbor) {
                    continue;
                }
                let weight = self.edge_weight(&edge) + node.weight;
                let better = self
                    .tentative
                    .get(&neighbor)
                    .map_or(true, |current| weight < current.weight);
                if better {
                    let chain = self.arena.push(neighbor, Some(node.chain));
                    self.tentative.insert(neighbor, WeightedNode { weight, chain });
                }
            }
        }

        self.promote_minimum();
        Ok(())
    }

    fn edge_weight(&self, edge: &Edge) -> f64 {
        match &self.weight_property {
            // Missing property falls back to the unweighted hop cost.
            Some(name) => edge.property(name).unwrap_or(1.0),
            None => 1.0,
        }
    }

    /// Move the tie group at the current minimum weight from the
    /// tentative map into the finalized map; the promoted set becomes
    /// the next frontier.
    fn promote_minimum(&mut self) {
        // (weight, vertex id) order makes tie promotion deterministic,
        // including which subset survives a limit cutoff.
        let mut order: Vec<(VertexId, f64)> = self
            .tentative
            .iter()
            .map(|(vertex, node)| (*vertex, node.weight))
            .collect();
        order.sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let Some(&(_, min_weight)) = order.first() else {
            self.frontier.clear();
            self.done = true;
            return;
        };

        let mut next = Vec::new();
        for (vertex, weight) in order {
            if weight.total_cmp(&min_weight) == Ordering::Greater {
                break;
            }
            if self
                .limit
                .is_some_and(|limit| self.finalized.len() as u64 >= limit)
            {
                // The cutoff may land inside the tie group.
                self.done = true;
                break;
            }
            if let Some(node) = self.tentative.remove(&vertex) {
                self.finalized.insert(vertex, node);
                next.push((vertex, node));
            }
        }

        debug!(
            round = self.rounds,
            min_weight,
            promoted = next.len(),
            finalized = self.finalized.len(),
            "tie group finalized"
        );
        self.frontier = next;
        if self.frontier.is_empty()
            || self
                .limit
                .is_some_and(|limit| self.finalized.len() as u64 >= limit)
        {
            self.done = true;
        }
    }
}
