use qcover_core::errors::{CoverError, ErrorInfo};
use qcover_core::rng::RngHandle;
use qcover_core::NodeId;
use rand::Rng;

use crate::simple::SimpleGraph;

/// Complete graph on `n` vertices numbered `0..n`.
pub fn complete(n: usize) -> SimpleGraph {
    let mut graph = SimpleGraph::with_nodes(n);
    join_all(&mut graph, 0, n);
    graph
}

/// Edgeless graph on `n` vertices numbered `0..n`.
pub fn empty(n: usize) -> SimpleGraph {
    SimpleGraph::with_nodes(n)
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> SimpleGraph {
    let mut graph = SimpleGraph::with_nodes(n);
    for i in 1..n {
        link(&mut graph, i - 1, i);
    }
    graph
}

/// Cycle on `n` vertices. Requires `n >= 3`.
pub fn cycle(n: usize) -> Result<SimpleGraph, CoverError> {
    if n < 3 {
        return Err(CoverError::Graph(
            ErrorInfo::new("cycle-too-small", "a simple cycle needs at least three vertices")
                .with_context("n", n),
        ));
    }
    let mut graph = path(n);
    link(&mut graph, n - 1, 0);
    Ok(graph)
}

/// Two complete graphs on `clique_size` vertices joined by a path of
/// `path_len` vertices.
///
/// Numbering: the left clique is `0..m`, the path is `m..m+p` and the right
/// clique is `m+p..2m+p`. Vertex `m-1` attaches to the first path vertex (or
/// directly to `m+p` when `path_len == 0`).
pub fn barbell(clique_size: usize, path_len: usize) -> Result<SimpleGraph, CoverError> {
    if clique_size < 2 {
        return Err(CoverError::Graph(
            ErrorInfo::new("barbell-too-small", "barbell cliques need at least two vertices")
                .with_context("clique_size", clique_size),
        ));
    }
    let m = clique_size;
    let total = 2 * m + path_len;
    let mut graph = SimpleGraph::with_nodes(total);
    join_all(&mut graph, 0, m);
    join_all(&mut graph, m + path_len, total);
    // chain: m-1, m, ..., m+p-1, m+p
    for i in (m - 1)..(m + path_len) {
        link(&mut graph, i, i + 1);
    }
    Ok(graph)
}

/// Erdős–Rényi `G(n, p)` graph drawn from the provided RNG.
pub fn gnp(n: usize, p: f64, rng: &mut RngHandle) -> Result<SimpleGraph, CoverError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(CoverError::Graph(
            ErrorInfo::new("invalid-probability", "edge probability must lie in [0, 1]")
                .with_context("p", p),
        ));
    }
    let mut graph = SimpleGraph::with_nodes(n);
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(p) {
                link(&mut graph, a, b);
            }
        }
    }
    Ok(graph)
}

fn join_all(graph: &mut SimpleGraph, start: usize, end: usize) {
    for a in start..end {
        for b in (a + 1)..end {
            link(graph, a, b);
        }
    }
}

// Endpoints come from `with_nodes` and are distinct, so insertion cannot fail.
fn link(graph: &mut SimpleGraph, a: usize, b: usize) {
    let _ = graph.add_edge(NodeId::from_raw(a as u64), NodeId::from_raw(b as u64));
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcover_core::Graph;

    #[test]
    fn barbell_matches_expected_shape() {
        let graph = barbell(4, 2).unwrap();
        assert_eq!(graph.node_count(), 10);
        // two K4 (6 edges each) plus 3 chain edges
        assert_eq!(graph.edge_count(), 15);
        assert!(graph.has_edge(NodeId::from_raw(3), NodeId::from_raw(4)));
        assert!(graph.has_edge(NodeId::from_raw(5), NodeId::from_raw(6)));
        assert!(!graph.has_edge(NodeId::from_raw(4), NodeId::from_raw(6)));
    }

    #[test]
    fn barbell_without_path_joins_cliques_directly() {
        let graph = barbell(3, 0).unwrap();
        assert!(graph.has_edge(NodeId::from_raw(2), NodeId::from_raw(3)));
        assert_eq!(graph.edge_count(), 7);
    }

    #[test]
    fn small_cycles_are_rejected() {
        assert_eq!(cycle(2).unwrap_err().code(), "cycle-too-small");
    }
}
