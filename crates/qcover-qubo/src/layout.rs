use indexmap::IndexSet;
use qcover_core::{Graph, NodeId};
use serde::{Deserialize, Serialize};

/// Assignment variable "vertex is placed in clique slot `slot`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariableKey {
    /// Vertex being assigned.
    pub vertex: NodeId,
    /// Clique slot in `0..k`.
    pub slot: usize,
}

impl VariableKey {
    /// Creates a key for `(vertex, slot)`.
    pub fn new(vertex: NodeId, slot: usize) -> Self {
        Self { vertex, slot }
    }
}

/// Dense indexing of the `k * |V|` assignment variables.
///
/// Vertices are ordered by ascending identifier and the index of
/// `(vertex, slot)` is `position(vertex) * k + slot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableLayout {
    vertices: IndexSet<NodeId>,
    slots: usize,
}

impl VariableLayout {
    /// Builds the layout for `graph` with `slots` clique slots.
    pub fn new(graph: &dyn Graph, slots: usize) -> Self {
        let mut ordered: Vec<NodeId> = graph.nodes().collect();
        ordered.sort_unstable();
        Self {
            vertices: ordered.into_iter().collect(),
            slots,
        }
    }

    /// Number of clique slots (k).
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Number of vertices covered by the layout.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of variables, `k * |V|`.
    pub fn num_variables(&self) -> usize {
        self.vertices.len() * self.slots
    }

    /// Vertices in layout order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.vertices.iter().copied()
    }

    /// Vertex stored at `position`.
    pub fn vertex_at(&self, position: usize) -> Option<NodeId> {
        self.vertices.get_index(position).copied()
    }

    /// Dense index for a key, if the vertex and slot belong to the layout.
    pub fn index_of(&self, key: VariableKey) -> Option<usize> {
        if key.slot >= self.slots {
            return None;
        }
        self.vertices
            .get_index_of(&key.vertex)
            .map(|position| position * self.slots + key.slot)
    }

    /// Key stored at a dense index.
    pub fn key_of(&self, index: usize) -> Option<VariableKey> {
        if self.slots == 0 {
            return None;
        }
        self.vertex_at(index / self.slots)
            .map(|vertex| VariableKey::new(vertex, index % self.slots))
    }
}
