//! Scalar kernels shared by the metrics.
//!
//! Callers validate lengths first; these zip the two slices and never look
//! past the shorter one.

/// `Σ(a[i] * b[i])`
#[inline]
pub(crate) fn sum_of_products(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// `Σ(v[i]²)`
#[inline]
pub(crate) fn sum_of_squares(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

/// `Σ(a[i] - b[i])²`
#[inline]
pub(crate) fn sum_of_squared_differences(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Dot product and both squared norms in a single pass.
#[inline]
pub(crate) fn dot_and_squared_norms(a: &[f64], b: &[f64]) -> (f64, f64, f64) {
    a.iter()
        .zip(b)
        .fold((0.0, 0.0, 0.0), |(dot, sq_a, sq_b), (x, y)| {
            (dot + x * y, sq_a + x * x, sq_b + y * y)
        })
}

/// Euclidean norm of a vector: `sqrt(Σ(v[i]²))`.
///
/// The empty vector has norm `0.0`.
///
/// ```rust
/// use vecsim::norm;
///
/// assert_eq!(norm(&[3.0, 4.0]), 5.0);
/// ```
#[inline]
#[must_use]
pub fn norm(v: &[f64]) -> f64 {
    sum_of_squares(v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_products() {
        assert_eq!(sum_of_products(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(sum_of_products(&[], &[]), 0.0);
    }

    #[test]
    fn test_sum_of_squared_differences() {
        let a = [0.0, 0.0];
        let b = [3.0, 4.0];
        assert_eq!(sum_of_squared_differences(&a, &b), 25.0);
        assert_eq!(sum_of_squared_differences(&b, &a), 25.0);
    }

    #[test]
    fn test_single_pass_matches_separate_sums() {
        let a = [1.0, -2.0, 3.5, 0.25];
        let b = [-4.0, 0.5, 2.0, 8.0];
        let (dot, sq_a, sq_b) = dot_and_squared_norms(&a, &b);
        assert_eq!(dot, sum_of_products(&a, &b));
        assert_eq!(sq_a, sum_of_squares(&a));
        assert_eq!(sq_b, sum_of_squares(&b));
    }

    #[test]
    fn test_norm() {
        assert_eq!(norm(&[3.0, 4.0]), 5.0);
        assert_eq!(norm(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(norm(&[]), 0.0);
    }
}
