#![deny(missing_docs)]
#![doc = "Simulated annealing sampler for QUBO models: temperature schedules, the Metropolis sweep kernel, cooperative cancellation and seed-stable parallel reads."]

mod cancel;
mod compiled;
mod config;
/// Deterministic seed derivation for attempts and reads.
pub mod determinism;
mod kernel;
mod sampler;
mod schedule;

pub use cancel::CancelToken;
pub use compiled::CompiledModel;
pub use config::{SamplerConfig, Schedule};
pub use kernel::acceptance_probability;
pub use sampler::{AnnealingSampler, Sample, SampleSet};
pub use schedule::{auto_range, build_temperatures};
