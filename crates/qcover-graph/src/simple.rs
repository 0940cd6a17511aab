use std::collections::{BTreeMap, BTreeSet};

use qcover_core::errors::{CoverError, ErrorInfo};
use qcover_core::{Graph, NodeId};

/// Deterministic simple undirected graph backed by ordered adjacency sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleGraph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    next_raw: u64,
}

impl SimpleGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` isolated vertices numbered `0..n`.
    pub fn with_nodes(n: usize) -> Self {
        let mut graph = Self::new();
        for _ in 0..n {
            graph.add_node();
        }
        graph
    }

    /// Adds a fresh vertex and returns its identifier.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::from_raw(self.next_raw);
        self.insert_node(id);
        id
    }

    /// Inserts a vertex with a caller chosen identifier. Returns `false` if it
    /// already existed.
    pub fn insert_node(&mut self, node: NodeId) -> bool {
        self.next_raw = self.next_raw.max(node.as_raw().saturating_add(1));
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, BTreeSet::new());
        true
    }

    /// Joins two existing vertices. Returns `false` if the edge already existed.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<bool, CoverError> {
        if a == b {
            return Err(node_error(
                "self-loop",
                "simple graphs cannot contain self loops",
                a,
            ));
        }
        for node in [a, b] {
            if !self.adjacency.contains_key(&node) {
                return Err(node_error(
                    "unknown-node",
                    "edge endpoint does not exist",
                    node,
                ));
            }
        }
        let inserted = self
            .adjacency
            .get_mut(&a)
            .map(|set| set.insert(b))
            .unwrap_or(false);
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.insert(a);
        }
        Ok(inserted)
    }

    /// Builds a graph from raw vertex and edge lists, inserting edge endpoints
    /// that were not listed as vertices.
    pub fn from_edges(
        nodes: impl IntoIterator<Item = u64>,
        edges: impl IntoIterator<Item = (u64, u64)>,
    ) -> Result<Self, CoverError> {
        let mut graph = Self::new();
        for raw in nodes {
            graph.insert_node(NodeId::from_raw(raw));
        }
        for (a, b) in edges {
            let (a, b) = (NodeId::from_raw(a), NodeId::from_raw(b));
            graph.insert_node(a);
            graph.insert_node(b);
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Returns the neighbours of `node` in ascending order.
    pub fn neighbours(&self, node: NodeId) -> Result<&BTreeSet<NodeId>, CoverError> {
        self.adjacency
            .get(&node)
            .ok_or_else(|| node_error("unknown-node", "node does not exist", node))
    }
}

impl Graph for SimpleGraph {
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (NodeId, NodeId)> + '_> {
        Box::new(self.adjacency.iter().flat_map(|(&a, neighbours)| {
            neighbours.range(a..).filter(move |&&b| b != a).map(move |&b| (a, b))
        }))
    }

    fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(&a)
            .map(|neighbours| neighbours.contains(&b))
            .unwrap_or(false)
    }

    fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map(BTreeSet::len).unwrap_or(0)
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}

fn node_error(code: &str, message: &str, node: NodeId) -> CoverError {
    CoverError::Graph(ErrorInfo::new(code, message).with_context("node", node))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_listed_once() {
        let graph = SimpleGraph::from_edges(0..4, [(0, 1), (1, 0), (2, 1), (3, 0)]).unwrap();
        let edges: Vec<_> = graph
            .edges()
            .map(|(a, b)| (a.as_raw(), b.as_raw()))
            .collect();
        assert_eq!(edges, vec![(0, 1), (0, 3), (1, 2)]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn inserted_ids_advance_the_counter() {
        let mut graph = SimpleGraph::new();
        graph.insert_node(NodeId::from_raw(10));
        assert_eq!(graph.add_node(), NodeId::from_raw(11));
    }
}
