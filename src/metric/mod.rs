//! Finite Metric Spaces: Index-Only Distance Queries
//!
//! The landmark selector and witness edge builder never need to see the
//! underlying point representation — only a point count and a pairwise
//! distance query over integer indices. [`FiniteMetricSpace`] captures
//! exactly that capability.
//!
//! ## Contract
//!
//! For all `i, j < size()`:
//! - `distance(i, j) >= 0` and finite (never NaN),
//! - `distance(i, j) == distance(j, i)`,
//! - `distance(i, i) == 0`,
//! - repeated calls return the same value (pure query, no side effects).
//!
//! The triangle inequality is *not* required; witness constructions are
//! well defined on arbitrary dissimilarity data.

mod euclidean;
mod explicit;

pub use euclidean::EuclideanSpace;
pub use explicit::ExplicitSpace;

use crate::error::{Result, WitnessError};

/// A finite, ordered collection of points with a pairwise distance query.
pub trait FiniteMetricSpace {
    /// Number of points in the space.
    fn size(&self) -> usize;

    /// Distance between the points at indices `i` and `j`.
    fn distance(&self, i: usize, j: usize) -> f64;
}

/// Query a distance and verify it is a usable metric value.
///
/// Negative or NaN distances indicate a broken metric implementation and
/// surface as [`WitnessError::InvalidMetric`].
pub(crate) fn checked_distance<M: FiniteMetricSpace + ?Sized>(
    space: &M,
    i: usize,
    j: usize,
) -> Result<f64> {
    let value = space.distance(i, j);
    if value.is_nan() || value < 0.0 {
        return Err(WitnessError::InvalidMetric { i, j, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    struct BrokenMetric;

    impl FiniteMetricSpace for BrokenMetric {
        fn size(&self) -> usize {
            2
        }
        fn distance(&self, i: usize, j: usize) -> f64 {
            if i == j {
                0.0
            } else {
                -1.0
            }
        }
    }

    #[test]
    fn test_checked_distance_rejects_negative() {
        let err = checked_distance(&BrokenMetric, 0, 1).unwrap_err();
        assert_eq!(
            err,
            WitnessError::InvalidMetric {
                i: 0,
                j: 1,
                value: -1.0
            }
        );
    }

    #[test]
    fn test_checked_distance_accepts_valid() {
        let space = EuclideanSpace::new(array![[0.0, 0.0], [3.0, 4.0]]);
        assert!((checked_distance(&space, 0, 1).unwrap() - 5.0).abs() < 1e-12);
    }
}
