use std::fs;
use std::path::Path;

use qcover_anneal::SamplerConfig;
use qcover_core::errors::{CoverError, ErrorInfo};
use qcover_qubo::DEFAULT_PENALTY_A;
use serde::{Deserialize, Serialize};

/// Parameters of a minimum clique cover search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Membership weight A; the non-edge weight B is derived from it.
    #[serde(default = "default_penalty_a")]
    pub penalty_a: f64,
    /// Annealing reads per attempted k.
    #[serde(default = "default_num_reads")]
    pub num_reads: usize,
    /// Sampler parameters shared by every attempt.
    #[serde(default)]
    pub sampler: SamplerConfig,
    /// Master seed and provenance label.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_penalty_a() -> f64 {
    DEFAULT_PENALTY_A
}

fn default_num_reads() -> usize {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            penalty_a: default_penalty_a(),
            num_reads: default_num_reads(),
            sampler: SamplerConfig::default(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed; attempt `k` anneals under the substream `(master_seed, k)`.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label copied into search reports.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x0C11_C0E5_5EED_0001_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

fn parse_error(err: impl ToString) -> CoverError {
    CoverError::Config(ErrorInfo::new("config-parse", err.to_string()))
}

impl SearchConfig {
    /// Parses a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CoverError> {
        serde_yaml::from_str(yaml).map_err(parse_error)
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, CoverError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            CoverError::Serde(
                ErrorInfo::new("config-read", format!("failed to read config: {err}"))
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| match err {
            CoverError::Config(info) => {
                CoverError::Config(info.with_context("path", path.display()))
            }
            other => other,
        })
    }

    /// Serialises the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, CoverError> {
        serde_yaml::to_string(self)
            .map_err(|err| CoverError::Serde(ErrorInfo::new("yaml-serialize", err.to_string())))
    }

    /// Checks the search-level parameters and the sampler configuration.
    pub fn validate(&self) -> Result<(), CoverError> {
        if self.num_reads == 0 {
            return Err(CoverError::Config(
                ErrorInfo::new("invalid-num-reads", "at least one read per attempt is required")
                    .with_context("num_reads", self.num_reads),
            ));
        }
        if !(self.penalty_a.is_finite() && self.penalty_a > 0.0) {
            return Err(CoverError::Config(
                ErrorInfo::new("invalid-penalty", "membership weight must be positive and finite")
                    .with_context("penalty_a", self.penalty_a),
            ));
        }
        self.sampler.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SearchConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.num_reads, 100);
        assert_eq!(config.penalty_a, 2.0);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = SearchConfig::from_yaml_str("num_reads: [oops").unwrap_err();
        assert_eq!(err.code(), "config-parse");
    }
}
