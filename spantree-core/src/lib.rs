//! spantree-core: bounded single-source shortest paths over pluggable graph stores.
//!
//! This library computes weighted shortest paths from a single source
//! vertex outward over a graph whose edges and properties live behind
//! the [`GraphStore`] seam. Two query shapes are served:
//!
//! - **to-many**: the shortest path to every reachable vertex, up to a
//!   result-count limit;
//! - **to-one**: the shortest path to a single target, returned as soon
//!   as that target's path is settled.
//!
//! Traversal advances round by round under three simultaneous resource
//! bounds: a per-vertex edge-sampling cap (*degree*), a supernode
//! threshold (*skip-degree*) that drops a vertex's edges entirely once
//! it proves too wide for unbiased sampling, and a total search-space
//! ceiling (*capacity*) that fails the whole query rather than return
//! a truncated answer. Exact shortest paths are only guaranteed when
//! degree and skip-degree are unbounded; negative edge weights are not
//! supported.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use spantree_core::prelude::*;
//!
//! let mut graph = MemoryGraph::new();
//! graph.add_weighted_edge("A", "B", "road", &[("w", 2.0)]);
//! graph.add_weighted_edge("A", "C", "road", &[("w", 1.0)]);
//!
//! let paths = PathQuery::new(graph.vertex_id("A").unwrap())
//!     .weight_property("w")
//!     .run(&graph)?;
//! ```
//!
//! # Module Organization
//!
//! - [`store`]: the backend seam (`GraphStore`, vertex/label tokens, edges)
//! - [`memory`]: petgraph-backed in-process store
//! - [`chain`]: arena of backward-linked path prefixes
//! - [`paths`]: finalized results and their views
//! - [`sampler`]: degree-capped, supernode-aware edge sampling
//! - [`engine`]: the round-based frontier expansion engine
//! - [`query`]: validation and the two public query operations
//! - [`builder`]: fluent query configuration
//! - [`report`]: plain/JSON output shapes
//! - [`config`]: spantree.toml loading
//! - [`error`]: typed error handling
//!
//! # Cargo Features
//!
//! - `dot` (default): Graphviz DOT export of result path trees

pub mod builder;
pub mod chain;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod memory;
pub mod paths;
pub mod prelude;
pub mod query;
pub mod report;
pub mod sampler;
pub mod store;

#[cfg(feature = "dot")]
pub mod visualize;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{SpantreeError, SpantreeResult};

// Store seam
pub use store::{Direction, Edge, EdgeIter, GraphStore, LabelId, VertexId};

// In-memory store
pub use memory::{EdgeSpec, GraphSpec, MemoryGraph};

// Path chains
pub use chain::{ChainIndex, PathArena};

// Results
pub use paths::{ShortestPaths, WeightedPath};

// Engine
pub use engine::Traverser;

// Sampling
pub use sampler::NeighborSampler;

// Queries
pub use builder::PathQuery;
pub use query::{single_source_shortest_paths, weighted_shortest_path, QueryOptions};

// Reporting
pub use report::{build_report, print_json, print_plain, PathEntry, PathReport};

// Configuration
pub use config::{load_config, OutputConfig, SpantreeConfig, TraversalDefaults};

// Logging
pub use logging::init_structured_logging;

// Feature-gated re-exports
#[cfg(feature = "dot")]
pub use visualize::generate_dot;

#[cfg(test)]
mod tests;
