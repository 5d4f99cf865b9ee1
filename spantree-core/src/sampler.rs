//! Supernode-aware neighbor sampling.
//!
//! Wraps the store's edge iterator to apply the degree cap and the
//! skip-degree rejection. Sampling only the first `degree` edges of an
//! extremely high-degree vertex would produce a biased, order-dependent
//! result, so once a vertex proves to have at least `skip_degree` edges
//! its contribution is dropped entirely for the round.

use tracing::debug;

use crate::error::SpantreeResult;
use crate::store::{Direction, Edge, GraphStore, LabelId, VertexId};

/// Per-vertex edge sampler with a degree cap and an optional
/// skip-degree threshold.
#[derive(Debug, Clone, Copy)]
pub struct NeighborSampler {
    degree: Option<u64>,
    skip_degree: u64,
}

impl NeighborSampler {
    /// `degree` of `None` means unbounded; `skip_degree` of 0 disables
    /// supernode skipping.
    pub fn new(degree: Option<u64>, skip_degree: u64) -> Self {
        Self {
            degree,
            skip_degree,
        }
    }

    /// The cap passed to the store's edge fetch.
    ///
    /// With skip-degree enabled the fetch must run up to the threshold
    /// to detect a supernode, so the cap is `skip_degree`, not `degree`.
    pub fn fetch_limit(&self) -> Option<u64> {
        if self.skip_degree > 0 {
            Some(self.skip_degree)
        } else {
            self.degree
        }
    }

    /// Sample the edges of `vertex` for one round.
    ///
    /// Returns an empty set when the vertex turns out to be a
    /// supernode; otherwise at most `degree` edges.
    pub fn sample<G: GraphStore>(
        &self,
        store: &G,
        vertex: VertexId,
        direction: Direction,
        label: Option<LabelId>,
    ) -> SpantreeResult<Vec<Edge>> {
        let edges = store.edges_of_vertex(vertex, direction, label, self.fetch_limit())?;
        if self.skip_degree == 0 {
            // The store already capped the fetch at `degree`.
            return Ok(edges.collect());
        }

        // Validation guarantees a bounded degree whenever skipping is on.
        let keep = self.degree.unwrap_or(u64::MAX);
        let mut buffer = Vec::new();
        let mut fetched = 0u64;
        for edge in edges {
            fetched += 1;
            if (buffer.len() as u64) < keep {
                buffer.push(edge);
            }
            if fetched >= self.skip_degree {
                debug!(vertex = %vertex, fetched, "supernode skipped");
                return Ok(Vec::new());
            }
        }
        Ok(buffer)
    }
}
