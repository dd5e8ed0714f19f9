//! Dot product (inner product) similarity

use super::ops::sum_of_products;
use super::{check_dimensions, Dimension};
use crate::error::Result;

/// Dot product of two vectors: `Σ(a[i] * b[i])`.
///
/// # Errors
/// `DimensionMismatch` if the lengths differ or either vector is empty.
///
/// ```rust
/// use vecsim::dot_product;
///
/// assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, -1.0, 0.0]).unwrap(), 2.0);
/// assert!(dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0]).is_err());
/// ```
#[inline]
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b, Dimension::Any)?;
    Ok(sum_of_products(a, b))
}

/// Dot product restricted to 2D vectors
#[inline]
pub fn dot_product_2d(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b, Dimension::PLANAR)?;
    dot_product(a, b)
}
