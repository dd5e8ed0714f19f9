//! Similarity and distance metrics over `f64` vectors
//!
//! Every metric has a generic N-dimensional routine and a 2D entry point that
//! adds an exact-length check in front of it.

pub mod cosine;
pub mod dot;
pub mod euclidean;
mod ops;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{MetricError, Result};

pub use cosine::{cosine_distance, cosine_similarity, cosine_similarity_2d};
pub use dot::{dot_product, dot_product_2d};
pub use euclidean::{euclidean_distance, euclidean_distance_2d, euclidean_distance_squared};
pub use ops::norm;

/// Length rule a pair of vectors must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Equal, non-zero lengths.
    #[default]
    Any,
    /// Both vectors have exactly this many components.
    Exactly(usize),
}

impl Dimension {
    /// Requirement of the 2D variants.
    pub const PLANAR: Dimension = Dimension::Exactly(2);

    /// Whether vectors of these lengths satisfy the requirement.
    pub fn admits(&self, left: usize, right: usize) -> bool {
        if left != right {
            return false;
        }
        match *self {
            Dimension::Any => left > 0,
            Dimension::Exactly(n) => left == n,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Any => write!(f, "equal non-zero lengths"),
            Dimension::Exactly(n) => write!(f, "exactly {} dimensions", n),
        }
    }
}

/// Validate a vector pair against `required`, returning the shared length.
///
/// Runs before any arithmetic in every metric.
pub fn check_dimensions(a: &[f64], b: &[f64], required: Dimension) -> Result<usize> {
    let (left, right) = (a.len(), b.len());
    if required.admits(left, right) {
        return Ok(left);
    }

    trace!(left, right, %required, "rejecting vector pair");
    Err(MetricError::DimensionMismatch {
        left,
        right,
        required,
    })
}

/// A metric over two vectors
pub trait VectorMetric: Send + Sync {
    /// Short name used in logs and demo output
    fn name(&self) -> &'static str;

    /// Compute the metric, validating dimensions first
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64>;
}

/// Dot product metric
#[derive(Debug, Clone, Copy, Default)]
pub struct DotProduct;

impl VectorMetric for DotProduct {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    #[inline]
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        dot_product(a, b)
    }
}

/// Euclidean distance metric
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl VectorMetric for Euclidean {
    fn name(&self) -> &'static str {
        "euclidean"
    }

    #[inline]
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        euclidean_distance(a, b)
    }
}

/// Cosine similarity metric (zero vectors score `0.0`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

impl VectorMetric for Cosine {
    fn name(&self) -> &'static str {
        "cosine"
    }

    #[inline]
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        cosine_similarity(a, b)
    }
}

/// Restricts a metric to vectors of exactly `dimension` components.
///
/// `FixedDimension::planar(Cosine)` behaves like [`cosine_similarity_2d`].
#[derive(Debug, Clone, Copy)]
pub struct FixedDimension<M> {
    metric: M,
    dimension: usize,
}

impl<M: VectorMetric> FixedDimension<M> {
    pub fn new(metric: M, dimension: usize) -> Self {
        Self { metric, dimension }
    }

    pub fn planar(metric: M) -> Self {
        Self::new(metric, 2)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl<M: VectorMetric> VectorMetric for FixedDimension<M> {
    fn name(&self) -> &'static str {
        self.metric.name()
    }

    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        check_dimensions(a, b, Dimension::Exactly(self.dimension))?;
        self.metric.compute(a, b)
    }
}
