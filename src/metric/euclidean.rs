//! Euclidean metric over a point cloud stored as an `Array2<f64>`.

use ndarray::Array2;

use super::FiniteMetricSpace;

/// Finite metric space over rows of a point-cloud matrix.
///
/// Each row is one point; `distance` is the Euclidean distance between
/// rows, computed on demand. For repeated dense scans over large clouds,
/// precompute a distance matrix and use [`super::ExplicitSpace`] instead.
#[derive(Debug, Clone)]
pub struct EuclideanSpace {
    points: Array2<f64>,
}

impl EuclideanSpace {
    /// Create a space from an `n_points × dim` matrix.
    pub fn new(points: Array2<f64>) -> Self {
        Self { points }
    }

    /// Dimension of the ambient space.
    pub fn dim(&self) -> usize {
        self.points.ncols()
    }

    /// Precompute the full pairwise distance matrix.
    pub fn distance_matrix(&self) -> Array2<f64> {
        let n = self.points.nrows();
        let mut dm = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in i + 1..n {
                let d = self.distance(i, j);
                dm[[i, j]] = d;
                dm[[j, i]] = d;
            }
        }

        dm
    }
}

impl FiniteMetricSpace for EuclideanSpace {
    fn size(&self) -> usize {
        self.points.nrows()
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        let mut dist_sq = 0.0;
        for d in 0..self.points.ncols() {
            let diff = self.points[[i, d]] - self.points[[j, d]];
            dist_sq += diff * diff;
        }
        dist_sq.sqrt()
    }
}
