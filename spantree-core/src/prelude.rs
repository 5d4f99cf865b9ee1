//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use spantree_core::prelude::*;
//! ```
//!
//! This provides the most commonly needed types for running
//! shortest-path queries without polluting the namespace with
//! rarely-used items.

// Error types
pub use crate::error::{SpantreeError, SpantreeResult};

// The store seam and the bundled in-memory store
pub use crate::memory::{GraphSpec, MemoryGraph};
pub use crate::store::{Direction, Edge, GraphStore, LabelId, VertexId};

// Queries
pub use crate::builder::PathQuery;
pub use crate::query::{single_source_shortest_paths, weighted_shortest_path, QueryOptions};

// Results
pub use crate::paths::{ShortestPaths, WeightedPath};

// Reporting
pub use crate::report::{build_report, PathReport};

// Configuration
pub use crate::config::{load_config, SpantreeConfig};
