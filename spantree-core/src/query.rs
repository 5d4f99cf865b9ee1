//! The public query facade.
//!
//! Validates every input and cross-constraint before any traversal
//! state exists, resolves the optional label name against the store,
//! then drives a [`Traverser`] to completion under the capacity guard.
//! Capacity violations fail the whole query; a partial shortest-path
//! map is never returned.

use tracing::info;

use crate::engine::Traverser;
use crate::error::{SpantreeError, SpantreeResult};
use crate::paths::{ShortestPaths, WeightedPath};
use crate::store::{Direction, GraphStore, VertexId};

/// Parameters of a single-source traversal.
///
/// `None` in `degree`/`capacity`/`limit` means unbounded; a
/// `skip_degree` of 0 disables supernode skipping.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Source vertex token
    pub source: VertexId,
    /// Which incident edges to follow
    pub direction: Direction,
    /// Optional edge-label filter name
    pub label: Option<String>,
    /// Edge property holding the weight; absent means every hop costs 1
    pub weight_property: Option<String>,
    /// Max edges sampled per vertex per round
    pub degree: Option<u64>,
    /// Supernode threshold
    pub skip_degree: u64,
    /// Total search-space ceiling
    pub capacity: Option<u64>,
    /// Result-count cap (to-all query only)
    pub limit: Option<u64>,
}

impl QueryOptions {
    /// Options with everything unbounded, following outgoing edges.
    pub fn new(source: VertexId) -> Self {
        Self {
            source,
            direction: Direction::Out,
            label: None,
            weight_property: None,
            degree: None,
            skip_degree: 0,
            capacity: None,
            limit: None,
        }
    }

    /// Check the cross-constraints between the three bounds.
    ///
    /// Fails fast before any traversal:
    /// - a bounded capacity requires a bounded degree below it, and a
    ///   skip-degree below it;
    /// - an enabled skip-degree requires a bounded degree at or below it.
    pub fn validate(&self) -> SpantreeResult<()> {
        if let Some(capacity) = self.capacity {
            match self.degree {
                Some(degree) if degree < capacity => {}
                Some(degree) => {
                    return Err(SpantreeError::invalid_argument(format!(
                        "degree must be < capacity, but got degree '{}' and capacity '{}'",
                        degree, capacity
                    )));
                }
                None => {
                    return Err(SpantreeError::invalid_argument(
                        "degree must be bounded when capacity is bounded",
                    ));
                }
            }
            if self.skip_degree >= capacity {
                return Err(SpantreeError::invalid_argument(format!(
                    "skip degree must be < capacity, but got skip degree '{}' and capacity '{}'",
                    self.skip_degree, capacity
                )));
            }
        }
        if self.skip_degree > 0 {
            match self.degree {
                Some(degree) if self.skip_degree >= degree => {}
                Some(degree) => {
                    return Err(SpantreeError::invalid_argument(format!(
                        "skip degree must be >= degree, but got skip degree '{}' and degree '{}'",
                        self.skip_degree, degree
                    )));
                }
                None => {
                    return Err(SpantreeError::invalid_argument(
                        "degree must be bounded when skip degree is enabled",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Compute shortest paths from the source to every reachable vertex,
/// up to `options.limit` results.
///
/// Returns the finalized map. Fails on invalid arguments, an unknown
/// label, a source absent from the store, a store fetch error, or a
/// capacity violation.
pub fn single_source_shortest_paths<G>(
    store: &G,
    options: &QueryOptions,
) -> SpantreeResult<ShortestPaths>
where
    G: GraphStore + Sync,
{
    let mut traverser = prepare(store, options, options.limit)?;
    loop {
        traverser.advance()?;
        if traverser.is_done() {
            info!(
                source = %options.source,
                results = traverser.finalized_count(),
                rounds = traverser.rounds(),
                "single source shortest paths complete"
            );
            return Ok(traverser.into_paths());
        }
        check_capacity(options.capacity, traverser.explored())?;
    }
}

/// Compute the shortest path from the source to one target.
///
/// Returns as soon as the target's path is settled, without finalizing
/// more vertices than its discovery requires. `Ok(None)` means the
/// target is unreachable under the configured bounds, which is a normal
/// outcome, not an error. No result-count limit applies.
pub fn weighted_shortest_path<G>(
    store: &G,
    options: &QueryOptions,
    target: VertexId,
) -> SpantreeResult<Option<WeightedPath>>
where
    G: GraphStore + Sync,
{
    let mut traverser = prepare(store, options, None)?;
    loop {
        traverser.advance()?;
        if traverser.is_finalized(target) || traverser.is_done() {
            info!(
                source = %options.source,
                target = %target,
                found = traverser.is_finalized(target),
                rounds = traverser.rounds(),
                "weighted shortest path complete"
            );
            return Ok(traverser.into_paths().get(target));
        }
        check_capacity(options.capacity, traverser.explored())?;
    }
}

/// Validate, resolve the label, and seed an engine.
fn prepare<'g, G>(
    store: &'g G,
    options: &QueryOptions,
    limit: Option<u64>,
) -> SpantreeResult<Traverser<'g, G>>
where
    G: GraphStore,
{
    options.validate()?;
    if !store.contains_vertex(options.source) {
        return Err(SpantreeError::invalid_argument(format!(
            "source vertex {} is not in the store",
            options.source
        )));
    }
    let label = options
        .label
        .as_deref()
        .map(|name| store.edge_label_id(name))
        .transpose()?;
    Ok(Traverser::new(store, options, label, limit))
}

fn check_capacity(capacity: Option<u64>, explored: u64) -> SpantreeResult<()> {
    match capacity {
        Some(capacity) if explored > capacity => {
            Err(SpantreeError::capacity(capacity, explored))
        }
        _ => Ok(()),
    }
}
