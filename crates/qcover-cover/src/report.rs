use qcover_core::errors::{CoverError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::observer::AttemptSummary;
use crate::validate::CliqueCover;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum SearchOutcome {
    /// A valid cover was found at clique count `k`.
    Found {
        /// Smallest k at which a sample validated.
        k: usize,
        /// The validated cover.
        cover: CliqueCover,
    },
    /// No sample validated for any k up to the bound.
    Exhausted,
    /// Cancellation was requested before a cover was found.
    Cancelled,
}

/// Outcome of a search plus the provenance needed to reproduce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Final outcome.
    pub outcome: SearchOutcome,
    /// Attempted clique counts, in order.
    pub attempts: Vec<AttemptSummary>,
    /// Upper bound on k the search was run with.
    pub max_k: usize,
    /// SHA-256 over the sorted vertex and edge lists of the input graph.
    pub graph_hash: String,
    /// Master seed the attempt seeds were derived from.
    pub master_seed: u64,
    /// Label from the seed policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SearchReport {
    /// The cover and its k, if one was found.
    pub fn cover(&self) -> Option<(usize, &CliqueCover)> {
        match &self.outcome {
            SearchOutcome::Found { k, cover } => Some((*k, cover)),
            _ => None,
        }
    }

    /// Consumes the report, returning the cover and its k if one was found.
    pub fn into_cover(self) -> Option<(usize, CliqueCover)> {
        match self.outcome {
            SearchOutcome::Found { k, cover } => Some((k, cover)),
            _ => None,
        }
    }

    /// Serialises the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CoverError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| CoverError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
    }

    /// Parses a report previously written by [`SearchReport::to_json`].
    pub fn from_json(json: &str) -> Result<Self, CoverError> {
        serde_json::from_str(json)
            .map_err(|err| CoverError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))
    }
}
