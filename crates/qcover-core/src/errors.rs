//! Error surface of the cover search: one variant per failing stage, one payload shape.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and offending values for a rejected graph, model, sampler
/// run or configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code such as `empty-graph` or `invalid-num-reads`.
    pub code: String,
    /// What was rejected.
    pub message: String,
    /// Offending values keyed by name (`node`, `k`, `num_reads`, ...).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested fix, when there is an obvious one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload without context or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the clique cover engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CoverError {
    /// Graph structure errors, including degenerate inputs.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Energy model construction errors.
    #[error("model error: {0}")]
    Model(ErrorInfo),
    /// Annealing sampler errors.
    #[error("sampler error: {0}")]
    Sampler(ErrorInfo),
    /// Invalid search parameters or malformed configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and I/O errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl CoverError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CoverError::Graph(info)
            | CoverError::Model(info)
            | CoverError::Sampler(info)
            | CoverError::Config(info)
            | CoverError::Serde(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
