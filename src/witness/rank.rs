//! Bounded partial selection for the rank-`nu` smallest distance.

/// The `rank`-th smallest value (1-indexed) among `values`.
///
/// Keeps only the `rank` smallest values seen so far in a small sorted
/// buffer, so a scan costs O(len·rank) instead of the O(len·log len) of
/// a full sort. `rank` is the witness parameter `nu`, which is small
/// relative to the landmark count in practice.
///
/// Callers guarantee `1 <= rank <= values.len()`.
pub(crate) fn rank_smallest(values: impl Iterator<Item = f64>, rank: usize) -> f64 {
    debug_assert!(rank >= 1);

    let mut kept: Vec<f64> = Vec::with_capacity(rank);
    for value in values {
        if kept.len() < rank {
            kept.push(value);
            bubble_up(&mut kept);
        } else if value < kept[rank - 1] {
            kept[rank - 1] = value;
            bubble_up(&mut kept);
        }
    }

    debug_assert_eq!(kept.len(), rank);
    kept[rank - 1]
}

/// Restore sortedness after writing the last element.
fn bubble_up(kept: &mut [f64]) {
    let mut i = kept.len() - 1;
    while i > 0 && kept[i] < kept[i - 1] {
        kept.swap(i, i - 1);
        i -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_one_is_minimum() {
        let values = [3.0, 1.0, 2.0, 0.5, 4.0];
        assert_eq!(rank_smallest(values.iter().copied(), 1), 0.5);
    }

    #[test]
    fn test_middle_ranks() {
        let values = [3.0, 1.0, 2.0, 0.5, 4.0];
        assert_eq!(rank_smallest(values.iter().copied(), 2), 1.0);
        assert_eq!(rank_smallest(values.iter().copied(), 3), 2.0);
        assert_eq!(rank_smallest(values.iter().copied(), 5), 4.0);
    }

    #[test]
    fn test_duplicates() {
        let values = [1.0, 1.0, 0.0, 1.0];
        assert_eq!(rank_smallest(values.iter().copied(), 2), 1.0);
        assert_eq!(rank_smallest(values.iter().copied(), 4), 1.0);
    }

    #[test]
    fn test_matches_full_sort() {
        // Deterministic pseudo-random values, no RNG needed.
        let values: Vec<f64> = (0..40).map(|i| ((i * 7919) % 101) as f64 / 10.0).collect();
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        for rank in [1, 2, 3, 7, 40] {
            assert_eq!(rank_smallest(values.iter().copied(), rank), sorted[rank - 1]);
        }
    }
}
