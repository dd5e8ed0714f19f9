//! Euclidean distance computation

use super::ops::sum_of_squared_differences;
use super::{check_dimensions, Dimension};
use crate::error::Result;

/// Compute Euclidean distance between two vectors
///
/// # Arguments
/// * `a` - First vector
/// * `b` - Second vector
///
/// # Returns
/// The Euclidean distance (L2 norm of `a - b`), never negative
///
/// # Errors
/// `DimensionMismatch` if the lengths differ or either vector is empty
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    euclidean_distance_squared(a, b).map(f64::sqrt)
}

/// Compute squared Euclidean distance (avoids sqrt for comparison purposes)
#[inline]
pub fn euclidean_distance_squared(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b, Dimension::Any)?;
    Ok(sum_of_squared_differences(a, b))
}

/// Euclidean distance restricted to 2D vectors
///
/// ```rust
/// use vecsim::euclidean_distance_2d;
///
/// assert_eq!(euclidean_distance_2d(&[1.0, 2.0], &[4.0, 6.0]).unwrap(), 5.0);
/// ```
#[inline]
pub fn euclidean_distance_2d(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b, Dimension::PLANAR)?;
    euclidean_distance(a, b)
}
