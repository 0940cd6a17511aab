use std::fs::File;
use std::io::Write;
use std::path::Path;

use qcover_qubo::{EnergyModel, PenaltyWeights};
use serde::{Deserialize, Serialize};

/// Statistics recorded for one attempted clique count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptSummary {
    /// Clique count tried.
    pub k: usize,
    /// Binary variables in the model (`k * |V|`).
    pub variables: usize,
    /// Non-zero off-diagonal coefficients.
    pub interactions: usize,
    /// Penalty weights of the model.
    pub weights: PenaltyWeights,
    /// Lowest sampled energy, if any read finished.
    pub best_energy: Option<f64>,
    /// Samples handed to the validator before it accepted one or ran out.
    pub candidates_checked: usize,
    /// Fraction of accepted flips across the batch.
    pub acceptance_rate: f64,
    /// Whether a valid cover was found at this k.
    pub found: bool,
    /// Whether cancellation cut the batch short.
    pub interrupted: bool,
}

/// Hooks invoked by [`crate::CoverSearch`] around each attempted k.
pub trait SearchObserver {
    /// Called after the model for `k` is built and before sampling starts.
    fn on_attempt_started(&mut self, _k: usize, _model: &EnergyModel) {}

    /// Called once the samples for an attempt have been validated.
    fn on_attempt_finished(&mut self, _summary: &AttemptSummary) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Records attempt summaries for later inspection or CSV export.
#[derive(Debug, Clone, Default)]
pub struct AttemptLog {
    started: Vec<usize>,
    summaries: Vec<AttemptSummary>,
}

impl AttemptLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clique counts whose attempts were started, in order.
    pub fn started(&self) -> &[usize] {
        &self.started
    }

    /// Finished attempts in order.
    pub fn summaries(&self) -> &[AttemptSummary] {
        &self.summaries
    }

    /// Writes the recorded summaries to a CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        writeln!(
            file,
            "k,variables,interactions,penalty_a,penalty_b,best_energy,candidates_checked,acceptance_rate,found,interrupted"
        )?;
        for summary in &self.summaries {
            let best = summary
                .best_energy
                .map(|energy| format!("{energy:.6}"))
                .unwrap_or_default();
            writeln!(
                file,
                "{},{},{},{:.6},{:.6},{},{},{:.6},{},{}",
                summary.k,
                summary.variables,
                summary.interactions,
                summary.weights.a,
                summary.weights.b,
                best,
                summary.candidates_checked,
                summary.acceptance_rate,
                summary.found,
                summary.interrupted
            )?;
        }
        Ok(())
    }
}

impl SearchObserver for AttemptLog {
    fn on_attempt_started(&mut self, k: usize, _model: &EnergyModel) {
        self.started.push(k);
    }

    fn on_attempt_finished(&mut self, summary: &AttemptSummary) {
        self.summaries.push(summary.clone());
    }
}
