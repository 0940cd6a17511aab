use qcover_core::errors::{CoverError, ErrorInfo};
use qcover_core::RngHandle;
use qcover_qubo::QuadraticModel;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cancel::CancelToken;
use crate::compiled::CompiledModel;
use crate::config::SamplerConfig;
use crate::determinism::read_seed;
use crate::kernel::anneal_read;
use crate::schedule::build_temperatures;

/// One annealing read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Index of the read within its batch.
    pub read: usize,
    /// Final binary state, indexed like the model's variables.
    pub state: Vec<bool>,
    /// Energy of `state`, recomputed from the model.
    pub energy: f64,
    /// Flips accepted during the read.
    pub accepted_flips: usize,
    /// Flips proposed during the read.
    pub proposed_flips: usize,
}

/// Reads of one batch ordered by ascending energy, ties broken by read index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    samples: Vec<Sample>,
    interrupted: bool,
}

impl SampleSet {
    /// Lowest-energy sample, if any read completed.
    pub fn best(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Samples in ranking order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Fraction of proposed flips that were accepted across all reads.
    pub fn acceptance_rate(&self) -> f64 {
        let proposed: usize = self.samples.iter().map(|s| s.proposed_flips).sum();
        if proposed == 0 {
            return 0.0;
        }
        let accepted: usize = self.samples.iter().map(|s| s.accepted_flips).sum();
        accepted as f64 / proposed as f64
    }

    /// Returns whether a cancellation request cut the batch short.
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    /// Consumes the set, returning the ranked samples.
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Simulated annealing sampler over any [`QuadraticModel`].
///
/// Reads are independent and run on a rayon pool. Read `r` of a batch with
/// seed `s` is driven by the substream `(s, r)`, so results do not depend
/// on the thread count.
#[derive(Debug, Clone, Default)]
pub struct AnnealingSampler {
    config: SamplerConfig,
    cancel: CancelToken,
}

impl AnnealingSampler {
    /// Creates a sampler with the given configuration.
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
        }
    }

    /// Attaches a cancellation token polled once per sweep.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Runs `num_reads` independent reads seeded from `seed`.
    pub fn sample(
        &self,
        model: &dyn QuadraticModel,
        num_reads: usize,
        seed: u64,
    ) -> Result<SampleSet, CoverError> {
        if num_reads == 0 {
            return Err(CoverError::Sampler(
                ErrorInfo::new("invalid-num-reads", "at least one read is required")
                    .with_context("num_reads", num_reads),
            ));
        }
        self.config.validate()?;

        let compiled = CompiledModel::new(model);
        let temperatures = build_temperatures(&self.config.schedule, &compiled, self.config.sweeps);
        let quench_sweeps = if self.config.quench {
            self.config.max_quench_sweeps
        } else {
            0
        };

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.config.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build().map_err(|err| {
            CoverError::Sampler(ErrorInfo::new("thread-pool", err.to_string()))
        })?;

        let outcomes: Vec<_> = pool.install(|| {
            (0..num_reads)
                .into_par_iter()
                .map(|read| {
                    let mut rng = RngHandle::from_seed(read_seed(seed, read));
                    let outcome =
                        anneal_read(&compiled, &temperatures, quench_sweeps, &mut rng, &self.cancel);
                    (read, outcome)
                })
                .collect()
        });

        let interrupted = outcomes.iter().any(|(_, outcome)| outcome.interrupted);
        let mut samples: Vec<Sample> = outcomes
            .into_iter()
            .map(|(read, outcome)| Sample {
                read,
                energy: model.energy(&outcome.state),
                state: outcome.state,
                accepted_flips: outcome.accepted_flips,
                proposed_flips: outcome.proposed_flips,
            })
            .collect();
        samples.sort_by(|a, b| a.energy.total_cmp(&b.energy).then(a.read.cmp(&b.read)));

        trace!(
            reads = num_reads,
            variables = compiled.num_variables(),
            best = ?samples.first().map(|s| s.energy),
            interrupted,
            "annealing batch finished"
        );

        Ok(SampleSet {
            samples,
            interrupted,
        })
    }
}
