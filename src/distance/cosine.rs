//! Cosine similarity and distance computation

use super::ops::dot_and_squared_norms;
use super::{check_dimensions, Dimension};
use crate::error::Result;

/// Compute cosine similarity between two vectors
///
/// # Returns
/// `dot(a, b) / (‖a‖ * ‖b‖)`, nominally in `[-1, 1]`. The raw floating-point
/// quotient is returned without clamping. If either vector has zero norm the
/// direction is undefined and the result is exactly `0.0`.
///
/// # Errors
/// `DimensionMismatch` if the lengths differ or either vector is empty
///
/// ```rust
/// use vecsim::cosine_similarity;
///
/// assert_eq!(cosine_similarity(&[1.0, 2.0, 3.0, 4.0], &[0.0; 4]).unwrap(), 0.0);
/// ```
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b, Dimension::Any)?;
    let (dot, sq_a, sq_b) = dot_and_squared_norms(a, b);
    Ok(compute_cosine_similarity(dot, sq_a.sqrt(), sq_b.sqrt()))
}

/// Cosine similarity restricted to 2D vectors
#[inline]
pub fn cosine_similarity_2d(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b, Dimension::PLANAR)?;
    cosine_similarity(a, b)
}

/// Compute cosine distance (1 - cosine_similarity)
///
/// A zero vector has cosine distance `1.0` to everything.
#[inline]
pub fn cosine_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    cosine_similarity(a, b).map(|sim| 1.0 - sim)
}

#[inline]
fn compute_cosine_similarity(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
