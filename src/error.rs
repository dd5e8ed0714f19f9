//! Error types for vecsim

use thiserror::Error;

use crate::distance::Dimension;

pub type Result<T> = std::result::Result<T, MetricError>;

/// Errors raised by the metric functions.
///
/// A zero vector passed to cosine similarity is not an error; it yields `0.0`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    #[error("Dimension mismatch: left has {left}, right has {right}, expected {required}")]
    DimensionMismatch {
        left: usize,
        right: usize,
        required: Dimension,
    },
}

impl MetricError {
    /// Lengths of the two offending inputs, `(left, right)`.
    pub fn lengths(&self) -> (usize, usize) {
        match *self {
            MetricError::DimensionMismatch { left, right, .. } => (left, right),
        }
    }
}

/// Errors raised while loading or validating a [`MetricConfig`](crate::MetricConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
