use qcover_core::errors::{CoverError, ErrorInfo};
use qcover_core::Graph;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default membership weight `A`.
pub const DEFAULT_PENALTY_A: f64 = 2.0;

/// Penalty weights used by the clique cover energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    /// Membership weight: reward `-A` per placement, `+2A` per double placement.
    pub a: f64,
    /// Non-edge weight charged for two non-adjacent vertices sharing a slot.
    pub b: f64,
}

impl PenaltyWeights {
    /// Calibrates `B = A * 8 / min(2 * maxDegree, |V|)` for `graph`.
    ///
    /// Graphs without vertices are rejected. For edgeless graphs the
    /// denominator is clamped to 1.
    pub fn for_graph(graph: &dyn Graph, a: f64) -> Result<Self, CoverError> {
        if !a.is_finite() || a <= 0.0 {
            return Err(CoverError::Model(
                ErrorInfo::new("invalid-penalty", "membership penalty must be positive and finite")
                    .with_context("penalty_a", a)
                    .with_hint("the reference weight is 2.0"),
            ));
        }
        let nodes = graph.node_count();
        if nodes == 0 {
            return Err(CoverError::Graph(ErrorInfo::new(
                "empty-graph",
                "cannot build a clique cover model for a graph without vertices",
            )));
        }
        let max_degree = graph.max_degree();
        if max_degree == 0 {
            debug!(
                vertices = nodes,
                "edgeless graph; non-edge penalty denominator clamped to 1"
            );
        }
        let denominator = (2 * max_degree).min(nodes).max(1);
        Ok(Self {
            a,
            b: a * 8.0 / denominator as f64,
        })
    }

    /// Ratio `B / A`. Below 1.0 a single conflicting placement is cheaper
    /// than leaving a vertex unassigned.
    pub fn dominance_ratio(&self) -> f64 {
        self.b / self.a
    }
}
