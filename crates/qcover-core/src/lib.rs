#![deny(missing_docs)]
#![doc = "Core identifiers, the undirected graph contract, structured errors and deterministic seeding shared by the qcover crates."]

use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{CoverError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a vertex within a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structural contract for the simple undirected graphs searched for covers.
///
/// Implementations must be immutable for the duration of a search, must not
/// contain self loops and must answer `has_edge` symmetrically.
pub trait Graph: Send + Sync {
    /// Returns the vertices in ascending identifier order.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_>;

    /// Returns every undirected edge once, smaller identifier first.
    fn edges(&self) -> Box<dyn Iterator<Item = (NodeId, NodeId)> + '_>;

    /// Returns whether the vertex exists.
    fn contains(&self, node: NodeId) -> bool;

    /// Returns whether `a` and `b` are joined by an edge.
    fn has_edge(&self, a: NodeId, b: NodeId) -> bool;

    /// Returns the number of neighbours of `node` (zero for unknown vertices).
    fn degree(&self, node: NodeId) -> usize;

    /// Returns the number of vertices.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns the maximum vertex degree, or zero for an empty graph.
    fn max_degree(&self) -> usize {
        self.nodes().map(|node| self.degree(node)).max().unwrap_or(0)
    }
}
