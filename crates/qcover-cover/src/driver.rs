use qcover_anneal::determinism::attempt_seed;
use qcover_anneal::{AnnealingSampler, CancelToken};
use qcover_core::errors::{CoverError, ErrorInfo};
use qcover_core::Graph;
use qcover_graph::canonical_hash;
use qcover_qubo::EnergyModel;
use tracing::debug;

use crate::config::SearchConfig;
use crate::observer::{AttemptSummary, SearchObserver};
use crate::report::{SearchOutcome, SearchReport};
use crate::validate::{validate, CliqueCover, LabelledSample};

/// Finds the smallest `k <= max_k` for which annealing produces a valid
/// clique cover, using the default [`SearchConfig`].
///
/// Returns `Ok(None)` if no attempt validated.
pub fn find_minimum_cover(
    graph: &dyn Graph,
    max_k: usize,
) -> Result<Option<(usize, CliqueCover)>, CoverError> {
    CoverSearch::new(SearchConfig::default())
        .run(graph, max_k)
        .map(SearchReport::into_cover)
}

/// Iterative-deepening search over the clique count.
///
/// For `k = 1, 2, ...` the driver builds the energy model, anneals it and
/// validates the samples in ranking order, stopping at the first valid one.
pub struct CoverSearch<'o> {
    config: SearchConfig,
    cancel: CancelToken,
    observer: Option<&'o mut dyn SearchObserver>,
}

impl<'o> CoverSearch<'o> {
    /// Creates a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
            observer: None,
        }
    }

    /// Forwards attempt events to `observer`.
    pub fn with_observer(mut self, observer: &'o mut dyn SearchObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Stops the search once `cancel` fires.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search for `k` in `1..=max_k`.
    pub fn run(&mut self, graph: &dyn Graph, max_k: usize) -> Result<SearchReport, CoverError> {
        if max_k == 0 {
            return Err(CoverError::Config(
                ErrorInfo::new("invalid-max-k", "max_k must be at least one")
                    .with_context("max_k", max_k),
            ));
        }
        self.config.validate()?;

        let sampler = AnnealingSampler::new(self.config.sampler.clone())
            .with_cancel_token(self.cancel.clone());
        let master_seed = self.config.seed_policy.master_seed;
        let mut attempts = Vec::new();
        let mut outcome = SearchOutcome::Exhausted;

        for k in 1..=max_k {
            if self.cancel.is_cancelled() {
                outcome = SearchOutcome::Cancelled;
                break;
            }
            let model = EnergyModel::build(graph, k, self.config.penalty_a)?;
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.on_attempt_started(k, &model);
            }

            let seed = attempt_seed(master_seed, k);
            let samples = sampler.sample(&model, self.config.num_reads, seed)?;
            let mut candidates_checked = 0;
            let mut cover = None;
            if !samples.interrupted() {
                for sample in &samples {
                    candidates_checked += 1;
                    let labelled = LabelledSample::new(model.layout(), &sample.state);
                    if let Some(found) = validate(graph, &labelled, k) {
                        cover = Some(found);
                        break;
                    }
                }
            }

            let summary = AttemptSummary {
                k,
                variables: model.layout().num_variables(),
                interactions: model.num_interactions(),
                weights: model.weights(),
                best_energy: samples.best().map(|sample| sample.energy),
                candidates_checked,
                acceptance_rate: samples.acceptance_rate(),
                found: cover.is_some(),
                interrupted: samples.interrupted(),
            };
            debug!(
                k,
                variables = summary.variables,
                interactions = summary.interactions,
                best_energy = ?summary.best_energy,
                candidates = candidates_checked,
                found = summary.found,
                "clique cover attempt finished"
            );
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.on_attempt_finished(&summary);
            }
            attempts.push(summary);

            if let Some(cover) = cover {
                outcome = SearchOutcome::Found { k, cover };
                break;
            }
            if samples.interrupted() {
                outcome = SearchOutcome::Cancelled;
                break;
            }
        }

        Ok(SearchReport {
            outcome,
            attempts,
            max_k,
            graph_hash: canonical_hash(graph),
            master_seed,
            label: self.config.seed_policy.label.clone(),
        })
    }
}
