//! Sequential max-min (farthest-point) landmark sampling.

use rand::Rng;

use super::LandmarkSet;
use crate::error::{Result, WitnessError};
use crate::metric::{checked_distance, FiniteMetricSpace};

/// Result of a max-min sampling run.
#[derive(Debug, Clone)]
pub struct MaxMinSelection {
    /// The selected landmarks, in selection order.
    pub landmarks: LandmarkSet,
    /// Covering radius after each pick: `radii[i]` is the max-min value
    /// achieved when landmark `i` was selected. `radii[0]` is infinite
    /// (a single landmark covers nothing yet); the rest never increase.
    pub radii: Vec<f64>,
}

/// Greedy farthest-point sampler over a finite metric space.
///
/// Maintains, for every unselected point `z`, the running value
/// `min_dist[z] = min{d(z, l) : l already selected}` and picks the point
/// maximizing it. Updating `min_dist` incrementally after each pick keeps
/// the whole run at O(N·n) distance queries; recomputing it from scratch
/// per iteration would cost O(N·n²).
pub struct MaxMinSelector<'a, M: FiniteMetricSpace> {
    space: &'a M,
}

impl<'a, M: FiniteMetricSpace> MaxMinSelector<'a, M> {
    pub fn new(space: &'a M) -> Self {
        Self { space }
    }

    /// Select `n` landmarks, drawing landmark 0 uniformly from `rng`.
    ///
    /// Everything after the first draw is deterministic: argmax ties are
    /// broken toward the lowest point index, so a fixed seed reproduces
    /// the exact selection.
    pub fn select<R: Rng>(&self, n: usize, rng: &mut R) -> Result<MaxMinSelection> {
        let space_size = self.space.size();
        if n < 1 || n > space_size {
            return Err(WitnessError::InvalidParameter(format!(
                "landmark count {} outside valid range [1, {}]",
                n, space_size
            )));
        }

        let mut indices = Vec::with_capacity(n);
        let mut radii = Vec::with_capacity(n);
        let mut selected = vec![false; space_size];
        let mut min_dist = vec![f64::INFINITY; space_size];

        let first = rng.gen_range(0..space_size);
        indices.push(first);
        radii.push(f64::INFINITY);
        selected[first] = true;
        self.update_min_dist(first, &selected, &mut min_dist)?;

        for _ in 1..n {
            let mut best = None;
            let mut best_value = f64::NEG_INFINITY;
            for z in 0..space_size {
                if !selected[z] && min_dist[z] > best_value {
                    best_value = min_dist[z];
                    best = Some(z);
                }
            }

            // n <= space_size guarantees an unselected point remains.
            let next = best.expect("unselected point must exist");
            indices.push(next);
            radii.push(best_value);
            selected[next] = true;
            self.update_min_dist(next, &selected, &mut min_dist)?;
        }

        let landmarks = LandmarkSet::from_indices(indices, space_size)?;
        Ok(MaxMinSelection { landmarks, radii })
    }

    /// Fold the newly selected landmark into `min_dist`.
    fn update_min_dist(
        &self,
        landmark: usize,
        selected: &[bool],
        min_dist: &mut [f64],
    ) -> Result<()> {
        for z in 0..self.space.size() {
            if !selected[z] {
                let d = checked_distance(self.space, z, landmark)?;
                if d < min_dist[z] {
                    min_dist[z] = d;
                }
            }
        }
        Ok(())
    }
}
