use qcover_core::Graph;
use sha2::{Digest, Sha256};

/// Computes the canonical structural hash for the provided graph.
///
/// The digest covers the sorted vertex identifiers and the sorted edge list,
/// so two graphs hash equal exactly when they have the same vertices and
/// edges regardless of insertion order.
pub fn canonical_hash(graph: &dyn Graph) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"qcover-graph:v1");

    let mut nodes: Vec<u64> = graph.nodes().map(|node| node.as_raw()).collect();
    nodes.sort_unstable();
    update_slice(&nodes, &mut hasher);

    let mut edges: Vec<(u64, u64)> = graph
        .edges()
        .map(|(a, b)| {
            let (a, b) = (a.as_raw(), b.as_raw());
            (a.min(b), a.max(b))
        })
        .collect();
    edges.sort_unstable();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (a, b) in edges {
        hasher.update(a.to_le_bytes());
        hasher.update(b.to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}

fn update_slice(values: &[u64], hasher: &mut Sha256) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update(value.to_le_bytes());
    }
}
