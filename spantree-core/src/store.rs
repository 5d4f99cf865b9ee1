//! The backend seam: vertex/label tokens, edges, and the `GraphStore` trait.
//!
//! Traversal code never fabricates a [`VertexId`] or [`LabelId`]; it only
//! copies tokens minted by a store. Everything the engine needs from a
//! backend fits through [`GraphStore`]: an edge iterator per vertex and
//! label-name resolution. Edge weights are read off the edge itself via
//! its numeric property map.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{SpantreeError, SpantreeResult};

/// Opaque vertex identity token.
///
/// Comparable and hashable; the raw value is only meaningful to the
/// store that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u64);

impl VertexId {
    /// Mint a token from a store-internal raw value.
    ///
    /// For store implementors only; traversal code copies existing tokens.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The store-internal raw value behind this token.
    pub fn into_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque edge-label token, resolved from a label name by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelId(u32);

impl LabelId {
    /// Mint a token from a store-internal raw value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The store-internal raw value behind this token.
    pub fn into_raw(self) -> u32 {
        self.0
    }
}

/// Which incident edges of a vertex a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Outgoing edges only
    Out,
    /// Incoming edges only
    In,
    /// Both directions
    Both,
}

impl FromStr for Direction {
    type Err = SpantreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "out" | "outgoing" => Ok(Self::Out),
            "in" | "incoming" => Ok(Self::In),
            "both" => Ok(Self::Both),
            other => Err(SpantreeError::invalid_argument(format!(
                "direction must be one of out/in/both, got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Out => write!(f, "out"),
            Self::In => write!(f, "in"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// A labelled edge with a numeric property map.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Source endpoint
    pub from: VertexId,
    /// Target endpoint
    pub to: VertexId,
    /// Resolved label token
    pub label: LabelId,
    /// Named numeric properties (weights live here)
    pub properties: HashMap<String, f64>,
}

impl Edge {
    /// The endpoint that is not `vertex`.
    ///
    /// For a self-loop both endpoints coincide and `vertex` is returned.
    pub fn other_end(&self, vertex: VertexId) -> VertexId {
        if self.from == vertex {
            self.to
        } else {
            self.from
        }
    }

    /// Look up a named numeric property on this edge.
    pub fn property(&self, name: &str) -> Option<f64> {
        self.properties.get(name).copied()
    }
}

/// Iterator of edges handed out by a store.
pub type EdgeIter<'a> = Box<dyn Iterator<Item = Edge> + 'a>;

/// Narrow interface a traversal needs from a graph backend.
///
/// Implementations resolve a vertex plus direction/label/count into an
/// edge iterator. Fetch failures surface as [`SpantreeError::Store`]
/// and abort the whole query; the engine never retries.
pub trait GraphStore {
    /// Fetch up to `limit` edges incident to `vertex` in `direction`,
    /// optionally filtered to a single label. `None` means no cap.
    fn edges_of_vertex(
        &self,
        vertex: VertexId,
        direction: Direction,
        label: Option<LabelId>,
        limit: Option<u64>,
    ) -> SpantreeResult<EdgeIter<'_>>;

    /// Resolve an edge-label name to its token.
    fn edge_label_id(&self, name: &str) -> SpantreeResult<LabelId>;

    /// Whether `vertex` exists in this store.
    fn contains_vertex(&self, vertex: VertexId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!("out".parse::<Direction>().unwrap(), Direction::Out);
        assert_eq!("INCOMING".parse::<Direction>().unwrap(), Direction::In);
        assert_eq!("Both".parse::<Direction>().unwrap(), Direction::Both);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_other_end() {
        let a = VertexId::from_raw(1);
        let b = VertexId::from_raw(2);
        let edge = Edge {
            from: a,
            to: b,
            label: LabelId::from_raw(0),
            properties: HashMap::new(),
        };
        assert_eq!(edge.other_end(a), b);
        assert_eq!(edge.other_end(b), a);
    }

    #[test]
    fn test_self_loop_other_end() {
        let a = VertexId::from_raw(7);
        let edge = Edge {
            from: a,
            to: a,
            label: LabelId::from_raw(0),
            properties: HashMap::new(),
        };
        assert_eq!(edge.other_end(a), a);
    }

    #[test]
    fn test_property_lookup() {
        let mut properties = HashMap::new();
        properties.insert("w".to_string(), 2.5);
        let edge = Edge {
            from: VertexId::from_raw(1),
            to: VertexId::from_raw(2),
            label: LabelId::from_raw(0),
            properties,
        };
        assert_eq!(edge.property("w"), Some(2.5));
        assert_eq!(edge.property("missing"), None);
    }
}
