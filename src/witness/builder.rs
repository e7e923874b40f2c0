//! Witness edge-weight computation over landmark pairs.

use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;

use super::rank::rank_smallest;
use crate::error::{Result, WitnessError};
use crate::graph::WeightedGraph;
use crate::landmark::LandmarkSet;
use crate::metric::{checked_distance, FiniteMetricSpace};

/// Which witness contributes its `m` value to the radius `R_ab`.
///
/// The published formula subtracts the `m` value of the witness that
/// attains `E_ab = min_k max(d(a,k), d(b,k))`. The javaPlex
/// `LazyWitnessStream` instead recomputes `R_ab = E_ab − m_k` on every
/// scan iteration, so its stored radius uses the `m` value of the last
/// witness scanned, whichever point that happens to be. Both behaviors
/// are available so existing javaPlex filtrations can be reproduced
/// exactly; new code should keep the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusPolicy {
    /// Subtract the `m` value of the witness attaining the minimum
    /// (paper-faithful). Default.
    #[default]
    MinimizingWitness,
    /// Subtract the `m` value of the last witness scanned, matching
    /// javaPlex's historical output.
    LastScannedWitness,
}

/// Construction parameters for the lazy witness 1-skeleton.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LazyWitnessParams {
    /// Maximum simplex dimension for the downstream expansion stage.
    /// Carried through unchanged; the 1-skeleton itself ignores it.
    pub max_dimension: usize,
    /// Edge inclusion cutoff: an edge enters the graph iff its radius is
    /// at most this value. `f64::INFINITY` keeps every edge.
    pub max_distance: f64,
    /// Neighbor rank for the `m` relaxation; 0 disables it. Must be
    /// strictly less than the landmark count.
    pub nu: usize,
    /// The `R` baseline offset of the witness-complex definition
    /// `W(D, R, nu)`. The computed edge radius is precisely the smallest
    /// `R` at which the edge appears, so the offset never enters the
    /// weight formula; the field is carried for downstream stages that
    /// filter by it.
    pub base_radius: f64,
    /// Filtration discretization granularity for the downstream stage.
    /// Carried through unchanged.
    pub num_divisions: usize,
    /// Aggregation-order policy for deriving `R_ab`; see [`RadiusPolicy`].
    pub radius_policy: RadiusPolicy,
}

impl Default for LazyWitnessParams {
    fn default() -> Self {
        Self {
            max_dimension: 2,
            max_distance: f64::INFINITY,
            nu: 2,
            base_radius: 0.0,
            num_divisions: 20,
            radius_policy: RadiusPolicy::MinimizingWitness,
        }
    }
}

/// Builds the weighted 1-skeleton of a lazy witness complex.
///
/// All parameter validation happens in [`LazyWitnessBuilder::new`],
/// before any O(n²·N) scanning; metric validation happens once while the
/// landmark-to-point distance matrix is materialized.
pub struct LazyWitnessBuilder<'a, M: FiniteMetricSpace> {
    space: &'a M,
    landmarks: &'a LandmarkSet,
    params: LazyWitnessParams,
}

impl<'a, M: FiniteMetricSpace> LazyWitnessBuilder<'a, M> {
    pub fn new(
        space: &'a M,
        landmarks: &'a LandmarkSet,
        params: LazyWitnessParams,
    ) -> Result<Self> {
        if landmarks.ambient_size() != space.size() {
            return Err(WitnessError::InvalidParameter(format!(
                "landmark set was drawn from a space of size {}, metric space has size {}",
                landmarks.ambient_size(),
                space.size()
            )));
        }
        if params.nu >= landmarks.len() {
            return Err(WitnessError::InvalidParameter(format!(
                "nu = {} must be less than the landmark count {}",
                params.nu,
                landmarks.len()
            )));
        }
        if params.max_distance.is_nan() || params.max_distance < 0.0 {
            return Err(WitnessError::InvalidParameter(format!(
                "max_distance must be nonnegative or infinite, got {}",
                params.max_distance
            )));
        }
        Ok(Self {
            space,
            landmarks,
            params,
        })
    }

    pub fn params(&self) -> &LazyWitnessParams {
        &self.params
    }

    /// Compute the witness graph.
    ///
    /// Cost is O(n·N) distance queries for the matrix and m-array passes
    /// plus an O(n²·N) scan over landmark pairs. Pairs are independent,
    /// so the scan is parallelized across them; within a pair the
    /// witnesses are visited in index order, which keeps both
    /// [`RadiusPolicy`] variants deterministic.
    pub fn build(&self) -> Result<WeightedGraph> {
        let n = self.landmarks.len();
        let distances = self.landmark_distances()?;
        let m = self.witness_relaxations(&distances);

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
            .collect();

        let policy = self.params.radius_policy;
        let max_distance = self.params.max_distance;
        let edges: Vec<(usize, usize, f64)> = pairs
            .into_par_iter()
            .filter_map(|(a, b)| {
                let radius = pair_radius(distances.row(a), distances.row(b), &m, policy);
                (radius <= max_distance).then_some((a, b, radius))
            })
            .collect();

        let mut graph = WeightedGraph::new(n);
        for (a, b, radius) in edges {
            graph.add_edge(a, b, radius);
        }
        Ok(graph)
    }

    /// Materialize the n × N landmark-to-point distance matrix, checking
    /// every queried distance once.
    fn landmark_distances(&self) -> Result<Array2<f64>> {
        let n = self.landmarks.len();
        let space_size = self.space.size();
        let mut matrix = Array2::<f64>::zeros((n, space_size));

        for (local, global) in self.landmarks.iter().enumerate() {
            for k in 0..space_size {
                matrix[[local, k]] = checked_distance(self.space, global, k)?;
            }
        }
        Ok(matrix)
    }

    /// The m-array: per witness point, the `nu`-th smallest distance to
    /// any landmark (zero when `nu = 0`).
    fn witness_relaxations(&self, distances: &Array2<f64>) -> Vec<f64> {
        let space_size = self.space.size();
        if self.params.nu == 0 {
            return vec![0.0; space_size];
        }

        (0..space_size)
            .map(|k| rank_smallest(distances.column(k).iter().copied(), self.params.nu))
            .collect()
    }
}

/// Witness radius for one landmark pair.
///
/// `row_a[k]` and `row_b[k]` are the distances from the two landmarks to
/// witness `k`. Scans witnesses in index order and derives the radius
/// per the policy, clamping negative values to zero.
fn pair_radius(
    row_a: ArrayView1<'_, f64>,
    row_b: ArrayView1<'_, f64>,
    m: &[f64],
    policy: RadiusPolicy,
) -> f64 {
    let mut e = f64::INFINITY;
    let mut m_witness = 0.0;

    for (k, relaxation) in m.iter().enumerate() {
        let seen = row_a[k].max(row_b[k]);
        match policy {
            RadiusPolicy::MinimizingWitness => {
                if seen < e {
                    e = seen;
                    m_witness = *relaxation;
                }
            }
            RadiusPolicy::LastScannedWitness => {
                e = e.min(seen);
                m_witness = *relaxation;
            }
        }
    }

    (e - m_witness).max(0.0)
}
