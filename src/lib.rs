//! vecsim
//!
//! Elementary vector similarity metrics over `f64` slices:
//!
//! - **Dot product**: [`dot_product`], [`dot_product_2d`]
//! - **Euclidean distance**: [`euclidean_distance`], [`euclidean_distance_2d`]
//! - **Cosine similarity**: [`cosine_similarity`], [`cosine_similarity_2d`]
//!
//! Each N-dimensional function accepts any two vectors of equal, non-zero
//! length; the `_2d` variants additionally require exactly two components.
//! Any other input fails with [`MetricError::DimensionMismatch`] before any
//! arithmetic is done.
//!
//! Cosine similarity of a zero vector is `0.0` by convention, not an error.
//!
//! ```rust
//! use vecsim::{cosine_similarity_2d, dot_product, euclidean_distance_2d};
//!
//! assert_eq!(dot_product(&[1.0, 0.0, -1.0, 2.0], &[3.0, 2.0, 0.0, -1.0])?, 1.0);
//! assert_eq!(euclidean_distance_2d(&[1.0, 2.0], &[4.0, 6.0])?, 5.0);
//! assert_eq!(cosine_similarity_2d(&[1.0, 1.0], &[0.0, 0.0])?, 0.0);
//! # Ok::<(), vecsim::MetricError>(())
//! ```

pub mod config;
pub mod distance;

mod error;

pub use config::{MetricConfig, MetricKind};
pub use distance::{
    check_dimensions, cosine_distance, cosine_similarity, cosine_similarity_2d, dot_product,
    dot_product_2d, euclidean_distance, euclidean_distance_2d, euclidean_distance_squared, norm,
    Cosine, Dimension, DotProduct, Euclidean, FixedDimension, VectorMetric,
};
pub use error::{ConfigError, MetricError, Result};
