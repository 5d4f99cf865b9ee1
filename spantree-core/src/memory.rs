//! In-process [`GraphStore`] backed by petgraph.
//!
//! `MemoryGraph` interns vertex and label names and keeps edges in a
//! `petgraph::graph::DiGraph`, which allows parallel edges between the
//! same endpoints (two roads between the same cities with different
//! weights are distinct edges). It exists so queries run end to end
//! without an external backend: the CLI deserializes a [`GraphSpec`]
//! edge list into one, and the test suite builds them programmatically.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Deserialize;

use crate::error::{SpantreeError, SpantreeResult};
use crate::store::{Direction, Edge, EdgeIter, GraphStore, LabelId, VertexId};

#[derive(Debug, Clone)]
struct EdgeData {
    label: LabelId,
    properties: HashMap<String, f64>,
}

/// In-memory graph store with named vertices and labelled edges.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    graph: DiGraph<String, EdgeData>,
    vertices: HashMap<String, NodeIndex>,
    labels: Vec<String>,
    label_ids: HashMap<String, LabelId>,
}

impl MemoryGraph {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a deserialized edge list.
    pub fn from_spec(spec: GraphSpec) -> Self {
        let mut graph = Self::new();
        for name in &spec.vertices {
            graph.add_vertex(name);
        }
        for edge in &spec.edges {
            let properties: Vec<(&str, f64)> = edge
                .properties
                .iter()
                .map(|(name, value)| (name.as_str(), *value))
                .collect();
            graph.add_weighted_edge(&edge.from, &edge.to, &edge.label, &properties);
        }
        graph
    }

    /// Intern `name` and return its vertex token. Idempotent.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        let index = match self.vertices.get(name) {
            Some(index) => *index,
            None => {
                let index = self.graph.add_node(name.to_string());
                self.vertices.insert(name.to_string(), index);
                index
            }
        };
        VertexId::from_raw(index.index() as u64)
    }

    /// Add an unweighted edge, interning endpoints and label as needed.
    pub fn add_edge(&mut self, from: &str, to: &str, label: &str) -> &mut Self {
        self.add_weighted_edge(from, to, label, &[])
    }

    /// Add an edge carrying named numeric properties.
    pub fn add_weighted_edge(
        &mut self,
        from: &str,
        to: &str,
        label: &str,
        properties: &[(&str, f64)],
    ) -> &mut Self {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        let label = self.intern_label(label);
        let properties = properties
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        self.graph.add_edge(
            NodeIndex::new(from.into_raw() as usize),
            NodeIndex::new(to.into_raw() as usize),
            EdgeData { label, properties },
        );
        self
    }

    /// Token for a vertex name, if interned.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .get(name)
            .map(|index| VertexId::from_raw(index.index() as u64))
    }

    /// Name behind a vertex token, if it belongs to this store.
    pub fn vertex_name(&self, vertex: VertexId) -> Option<&str> {
        self.graph
            .node_weight(NodeIndex::new(vertex.into_raw() as usize))
            .map(String::as_str)
    }

    /// Number of vertices in the store.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the store.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn intern_label(&mut self, name: &str) -> LabelId {
        match self.label_ids.get(name) {
            Some(label) => *label,
            None => {
                let label = LabelId::from_raw(self.labels.len() as u32);
                self.labels.push(name.to_string());
                self.label_ids.insert(name.to_string(), label);
                label
            }
        }
    }
}

impl GraphStore for MemoryGraph {
    fn edges_of_vertex(
        &self,
        vertex: VertexId,
        direction: Direction,
        label: Option<LabelId>,
        limit: Option<u64>,
    ) -> SpantreeResult<EdgeIter<'_>> {
        if !self.contains_vertex(vertex) {
            return Err(SpantreeError::store(format!(
                "vertex {} is not in this store",
                vertex
            )));
        }
        let index = NodeIndex::new(vertex.into_raw() as usize);
        let incident: Box<dyn Iterator<Item = petgraph::graph::EdgeReference<'_, EdgeData>>> =
            match direction {
                Direction::Out => Box::new(self.graph.edges_directed(index, petgraph::Outgoing)),
                Direction::In => Box::new(self.graph.edges_directed(index, petgraph::Incoming)),
                Direction::Both => Box::new(
                    self.graph
                        .edges_directed(index, petgraph::Outgoing)
                        .chain(self.graph.edges_directed(index, petgraph::Incoming)),
                ),
            };
        let edges = incident
            .filter(move |edge| label.map_or(true, |want| edge.weight().label == want))
            .map(|edge| Edge {
                from: VertexId::from_raw(edge.source().index() as u64),
                to: VertexId::from_raw(edge.target().index() as u64),
                label: edge.weight().label,
                properties: edge.weight().properties.clone(),
            });
        Ok(match limit {
            Some(cap) => Box::new(edges.take(cap as usize)),
            None => Box::new(edges),
        })
    }

    fn edge_label_id(&self, name: &str) -> SpantreeResult<LabelId> {
        self.label_ids
            .get(name)
            .copied()
            .ok_or_else(|| SpantreeError::unknown_label(name))
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        (vertex.into_raw() as usize) < self.graph.node_count()
    }
}

/// Deserializable edge-list form of a graph, as read from the CLI's
/// JSON graph file.
#[derive(Debug, Deserialize)]
pub struct GraphSpec {
    /// Extra vertices with no incident edges
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// One edge of a [`GraphSpec`].
#[derive(Debug, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_edge_label")]
    pub label: String,
    #[serde(default)]
    pub properties: HashMap<String, f64>,
}

fn default_edge_label() -> String {
    "edge".to_string()
}
