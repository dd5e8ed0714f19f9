//! Metric configuration
//!
//! Selects a metric and the dimension rule it enforces. Configurations are
//! plain serde structs so they can be embedded in larger JSON documents or
//! loaded from a file on their own.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::{Cosine, Dimension, DotProduct, Euclidean, FixedDimension, VectorMetric};
use crate::error::ConfigError;

/// Which metric to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    DotProduct,
    Euclidean,
    #[default]
    Cosine,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::DotProduct, MetricKind::Euclidean, MetricKind::Cosine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DotProduct => "dot_product",
            Self::Euclidean => "euclidean",
            Self::Cosine => "cosine",
        }
    }

    /// Whether larger values mean "more alike" (true for similarities, false for distances)
    pub fn higher_is_closer(&self) -> bool {
        !matches!(self, Self::Euclidean)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot_product" | "dot" => Ok(Self::DotProduct),
            "euclidean" | "l2" => Ok(Self::Euclidean),
            "cosine" => Ok(Self::Cosine),
            other => Err(ConfigError::Invalid(format!("unknown metric: {}", other))),
        }
    }
}

/// Metric configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Metric to compute
    pub kind: MetricKind,

    /// Length rule enforced before computing (default: any equal, non-zero length)
    #[serde(default)]
    pub dimension: Dimension,
}

impl MetricConfig {
    pub fn new(kind: MetricKind, dimension: Dimension) -> Self {
        Self { kind, dimension }
    }

    /// Configuration matching the `*_2d` functions
    pub fn planar(kind: MetricKind) -> Self {
        Self::new(kind, Dimension::PLANAR)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == Dimension::Exactly(0) {
            return Err(ConfigError::Invalid(
                "fixed dimension must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(kind = %config.kind, dimension = %config.dimension, "loaded metric config");
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the configured metric
    pub fn build(&self) -> Result<Box<dyn VectorMetric>, ConfigError> {
        self.validate()?;
        debug!(kind = %self.kind, dimension = %self.dimension, "building metric");

        let metric: Box<dyn VectorMetric> = match (self.kind, self.dimension) {
            (MetricKind::DotProduct, Dimension::Any) => Box::new(DotProduct),
            (MetricKind::Euclidean, Dimension::Any) => Box::new(Euclidean),
            (MetricKind::Cosine, Dimension::Any) => Box::new(Cosine),
            (MetricKind::DotProduct, Dimension::Exactly(n)) => Box::new(FixedDimension::new(DotProduct, n)),
            (MetricKind::Euclidean, Dimension::Exactly(n)) => Box::new(FixedDimension::new(Euclidean, n)),
            (MetricKind::Cosine, Dimension::Exactly(n)) => Box::new(FixedDimension::new(Cosine, n)),
        };
        Ok(metric)
    }
}
