//! Builder pattern API for shortest-path queries.
//!
//! Provides a fluent interface over [`QueryOptions`]:
//!
//! ```rust,ignore
//! use spantree_core::prelude::*;
//!
//! let paths = PathQuery::new(source)
//!     .direction(Direction::Out)
//!     .weight_property("w")
//!     .degree(64)
//!     .capacity(100_000)
//!     .run(&store)?;
//! ```

use crate::error::SpantreeResult;
use crate::paths::{ShortestPaths, WeightedPath};
use crate::query::{self, QueryOptions};
use crate::store::{Direction, GraphStore, VertexId};

/// Fluent configuration for the two query shapes.
#[derive(Debug, Clone)]
pub struct PathQuery {
    options: QueryOptions,
}

impl PathQuery {
    /// Start a query from `source` with everything unbounded.
    pub fn new(source: VertexId) -> Self {
        Self {
            options: QueryOptions::new(source),
        }
    }

    /// Which incident edges to follow (default: outgoing).
    pub fn direction(mut self, direction: Direction) -> Self {
        self.options.direction = direction;
        self
    }

    /// Restrict traversal to edges with this label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.options.label = Some(label.into());
        self
    }

    /// Read edge weights from this property; unset means every hop
    /// costs 1.
    pub fn weight_property(mut self, name: impl Into<String>) -> Self {
        self.options.weight_property = Some(name.into());
        self
    }

    /// Cap the edges sampled per vertex per round.
    pub fn degree(mut self, degree: u64) -> Self {
        self.options.degree = Some(degree);
        self
    }

    /// Skip vertices with at least this many edges; 0 disables.
    pub fn skip_degree(mut self, skip_degree: u64) -> Self {
        self.options.skip_degree = skip_degree;
        self
    }

    /// Fail the query once the search space exceeds this many vertices.
    pub fn capacity(mut self, capacity: u64) -> Self {
        self.options.capacity = Some(capacity);
        self
    }

    /// Cap the number of finalized results (to-all query only).
    pub fn limit(mut self, limit: u64) -> Self {
        self.options.limit = Some(limit);
        self
    }

    /// The accumulated options.
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Run the to-all query against `store`.
    pub fn run<G>(self, store: &G) -> SpantreeResult<ShortestPaths>
    where
        G: GraphStore + Sync,
    {
        query::single_source_shortest_paths(store, &self.options)
    }

    /// Run the to-one query against `store`.
    pub fn run_to<G>(self, store: &G, target: VertexId) -> SpantreeResult<Option<WeightedPath>>
    where
        G: GraphStore + Sync,
    {
        query::weighted_shortest_path(store, &self.options, target)
    }
}
