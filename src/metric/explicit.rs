//! Metric space backed by a precomputed distance matrix.

use ndarray::Array2;

use super::FiniteMetricSpace;
use crate::error::{Result, WitnessError};

/// Finite metric space defined directly by an `n × n` distance matrix.
///
/// Useful when distances come from an external source (geodesic
/// estimates, edit distances, dissimilarity data) or when a point cloud's
/// distances have already been materialized. Entries are taken as given;
/// malformed values (negative, NaN) are caught later by the consumers'
/// checked queries.
#[derive(Debug, Clone)]
pub struct ExplicitSpace {
    matrix: Array2<f64>,
}

impl ExplicitSpace {
    /// Wrap a square distance matrix.
    pub fn new(matrix: Array2<f64>) -> Result<Self> {
        if matrix.nrows() != matrix.ncols() {
            return Err(WitnessError::InvalidParameter(format!(
                "distance matrix must be square, got {}×{}",
                matrix.nrows(),
                matrix.ncols()
            )));
        }
        Ok(Self { matrix })
    }
}

impl FiniteMetricSpace for ExplicitSpace {
    fn size(&self) -> usize {
        self.matrix.nrows()
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        self.matrix[[i, j]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_explicit_lookup() {
        let space = ExplicitSpace::new(array![
            [0.0, 1.0, 2.0],
            [1.0, 0.0, 1.5],
            [2.0, 1.5, 0.0]
        ])
        .unwrap();

        assert_eq!(space.size(), 3);
        assert!((space.distance(0, 2) - 2.0).abs() < 1e-12);
        assert!((space.distance(2, 1) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_square() {
        let result = ExplicitSpace::new(Array2::<f64>::zeros((2, 3)));
        assert!(matches!(result, Err(WitnessError::InvalidParameter(_))));
    }
}
