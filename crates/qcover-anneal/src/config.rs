use qcover_core::errors::{CoverError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Parameters governing one batch of annealing reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Number of full sweeps per read (one flip attempt per variable each).
    #[serde(default = "default_sweeps")]
    pub sweeps: usize,
    /// Temperature schedule applied across the sweeps.
    #[serde(default)]
    pub schedule: Schedule,
    /// Run zero-temperature descent sweeps after the schedule.
    #[serde(default = "default_quench")]
    pub quench: bool,
    /// Upper bound on descent sweeps when `quench` is enabled.
    #[serde(default = "default_max_quench_sweeps")]
    pub max_quench_sweeps: usize,
    /// Worker threads for parallel reads (`None` uses every available core).
    #[serde(default)]
    pub threads: Option<usize>,
}

fn default_sweeps() -> usize {
    1000
}

fn default_quench() -> bool {
    true
}

fn default_max_quench_sweeps() -> usize {
    64
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sweeps: default_sweeps(),
            schedule: Schedule::default(),
            quench: default_quench(),
            max_quench_sweeps: default_max_quench_sweeps(),
            threads: None,
        }
    }
}

impl SamplerConfig {
    /// Checks the configuration before any read is started.
    pub fn validate(&self) -> Result<(), CoverError> {
        if self.sweeps == 0 {
            return Err(CoverError::Sampler(
                ErrorInfo::new("invalid-sweeps", "at least one sweep per read is required")
                    .with_context("sweeps", self.sweeps),
            ));
        }
        if self.threads == Some(0) {
            return Err(CoverError::Sampler(
                ErrorInfo::new("thread-pool", "thread count must be positive when set")
                    .with_hint("leave `threads` unset to use every core"),
            ));
        }
        self.schedule.validate()
    }
}

/// Supported temperature schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Schedule {
    /// Geometric decay between temperatures derived from the model: hot
    /// enough to accept the largest uphill flip half of the time, cold
    /// enough to accept the smallest one 1% of the time.
    #[default]
    Auto,
    /// Geometric decay between explicit temperatures.
    Geometric {
        /// Temperature of the first sweep.
        initial_temperature: f64,
        /// Temperature of the last sweep.
        final_temperature: f64,
    },
}

impl Schedule {
    /// Validates explicit temperatures.
    pub fn validate(&self) -> Result<(), CoverError> {
        match self {
            Schedule::Auto => Ok(()),
            Schedule::Geometric {
                initial_temperature,
                final_temperature,
            } => {
                let ordered = final_temperature.is_finite()
                    && initial_temperature.is_finite()
                    && *final_temperature > 0.0
                    && initial_temperature > final_temperature;
                if ordered {
                    Ok(())
                } else {
                    Err(CoverError::Sampler(
                        ErrorInfo::new(
                            "invalid-schedule",
                            "temperatures must be positive and strictly decreasing",
                        )
                        .with_context("initial_temperature", initial_temperature)
                        .with_context("final_temperature", final_temperature),
                    ))
                }
            }
        }
    }
}
