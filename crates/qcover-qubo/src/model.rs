use std::collections::BTreeMap;

use qcover_core::errors::{CoverError, ErrorInfo};
use qcover_core::Graph;
use tracing::debug;

use crate::ising::IsingModel;
use crate::layout::{VariableKey, VariableLayout};
use crate::penalty::PenaltyWeights;

/// Coefficient interface consumed by samplers.
///
/// Variables are dense indices `0..num_variables()`. `interactions` yields
/// each off-diagonal pair once with `i < j`.
pub trait QuadraticModel: Send + Sync {
    /// Number of binary variables.
    fn num_variables(&self) -> usize;

    /// Linear (diagonal) coefficient of variable `index`.
    fn linear(&self, index: usize) -> f64;

    /// Off-diagonal coefficients as `(i, j, value)` with `i < j`.
    fn interactions(&self) -> Box<dyn Iterator<Item = (usize, usize, f64)> + '_>;

    /// Energy of a binary state. Missing trailing entries read as 0.
    fn energy(&self, state: &[bool]) -> f64 {
        let bit = |index: usize| state.get(index).copied().unwrap_or(false);
        let linear: f64 = (0..self.num_variables())
            .filter(|&index| bit(index))
            .map(|index| self.linear(index))
            .sum();
        let quadratic: f64 = self
            .interactions()
            .filter(|&(i, j, _)| bit(i) && bit(j))
            .map(|(_, _, value)| value)
            .sum();
        linear + quadratic
    }
}

/// Accumulating builder for upper-triangular QUBO coefficients.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    coefficients: BTreeMap<(usize, usize), f64>,
}

impl ModelBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the linear coefficient of `index`.
    pub fn add_linear(&mut self, index: usize, value: f64) -> &mut Self {
        *self.coefficients.entry((index, index)).or_insert(0.0) += value;
        self
    }

    /// Adds `value` to the coefficient of the unordered pair `{a, b}`.
    ///
    /// `a == b` is a linear term since `x * x = x` for binary variables.
    pub fn add_quadratic(&mut self, a: usize, b: usize, value: f64) -> &mut Self {
        let key = (a.min(b), a.max(b));
        *self.coefficients.entry(key).or_insert(0.0) += value;
        self
    }

    /// Freezes the coefficients into a model over `layout`.
    pub fn finish(self, layout: VariableLayout, weights: PenaltyWeights) -> EnergyModel {
        EnergyModel {
            layout,
            weights,
            coefficients: self.coefficients,
        }
    }
}

/// Immutable QUBO encoding "the graph has a clique cover with k cliques".
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyModel {
    layout: VariableLayout,
    weights: PenaltyWeights,
    coefficients: BTreeMap<(usize, usize), f64>,
}

impl EnergyModel {
    /// Builds the clique cover model for `graph` with `slots` cliques and
    /// membership weight `penalty_a`.
    pub fn build(graph: &dyn Graph, slots: usize, penalty_a: f64) -> Result<Self, CoverError> {
        if slots == 0 {
            return Err(CoverError::Model(
                ErrorInfo::new("invalid-slots", "clique count must be at least one")
                    .with_context("k", slots),
            ));
        }
        let weights = PenaltyWeights::for_graph(graph, penalty_a)?;
        if weights.dominance_ratio() < 1.0 {
            debug!(
                k = slots,
                a = weights.a,
                b = weights.b,
                "non-edge penalty is weaker than the membership reward"
            );
        }
        let layout = VariableLayout::new(graph, slots);
        let vertices: Vec<_> = layout.vertices().collect();
        let index = |position: usize, slot: usize| position * slots + slot;

        let mut builder = ModelBuilder::new();
        for position in 0..vertices.len() {
            for slot in 0..slots {
                builder.add_linear(index(position, slot), -weights.a);
            }
            for c1 in 0..slots {
                for c2 in (c1 + 1)..slots {
                    builder.add_quadratic(index(position, c1), index(position, c2), 2.0 * weights.a);
                }
            }
        }
        for (pu, &u) in vertices.iter().enumerate() {
            for (pv, &v) in vertices.iter().enumerate().skip(pu + 1) {
                if graph.has_edge(u, v) {
                    continue;
                }
                for slot in 0..slots {
                    builder.add_quadratic(index(pu, slot), index(pv, slot), weights.b);
                }
            }
        }
        Ok(builder.finish(layout, weights))
    }

    /// Variable layout shared with the validator.
    pub fn layout(&self) -> &VariableLayout {
        &self.layout
    }

    /// Number of clique slots (k).
    pub fn slots(&self) -> usize {
        self.layout.slots()
    }

    /// Penalty weights used for this model.
    pub fn weights(&self) -> PenaltyWeights {
        self.weights
    }

    /// Number of stored off-diagonal coefficients.
    pub fn num_interactions(&self) -> usize {
        self.coefficients.keys().filter(|(i, j)| i != j).count()
    }

    /// Coefficient of the unordered pair `{a, b}` (zero when absent).
    pub fn coefficient(&self, a: usize, b: usize) -> f64 {
        self.coefficients
            .get(&(a.min(b), a.max(b)))
            .copied()
            .unwrap_or(0.0)
    }

    /// Coefficient between two keyed variables (zero when absent or unknown).
    pub fn coefficient_by_key(&self, a: VariableKey, b: VariableKey) -> f64 {
        match (self.layout.index_of(a), self.layout.index_of(b)) {
            (Some(i), Some(j)) => self.coefficient(i, j),
            _ => 0.0,
        }
    }

    /// All stored coefficients in ascending `(i, j)` order, `i <= j`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.coefficients.iter().map(|(&key, &value)| (key, value))
    }

    /// Converts to the equivalent spin model under `x = (1 + s) / 2`.
    pub fn to_ising(&self) -> IsingModel {
        IsingModel::from_qubo(self.num_variables(), self.iter())
    }
}

impl QuadraticModel for EnergyModel {
    fn num_variables(&self) -> usize {
        self.layout.num_variables()
    }

    fn linear(&self, index: usize) -> f64 {
        self.coefficient(index, index)
    }

    fn interactions(&self) -> Box<dyn Iterator<Item = (usize, usize, f64)> + '_> {
        Box::new(
            self.coefficients
                .iter()
                .filter(|((i, j), _)| i != j)
                .map(|(&(i, j), &value)| (i, j, value)),
        )
    }
}
