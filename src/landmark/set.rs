//! Ordered, immutable landmark index sets.

use crate::error::{Result, WitnessError};

/// An ordered set of distinct landmark indices into a finite metric space.
///
/// Provides the bijection between landmark-local indices `0..len()` (the
/// vertices of the witness graph) and global point indices in the ambient
/// space. Fixed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkSet {
    indices: Vec<usize>,
    ambient_size: usize,
}

impl LandmarkSet {
    /// Build a landmark set from explicitly chosen global indices.
    ///
    /// Indices must be nonempty, pairwise distinct, and lie in
    /// `[0, ambient_size)`.
    pub fn from_indices(indices: Vec<usize>, ambient_size: usize) -> Result<Self> {
        if indices.is_empty() {
            return Err(WitnessError::InvalidParameter(
                "landmark set must contain at least one point".into(),
            ));
        }
        if indices.len() > ambient_size {
            return Err(WitnessError::InvalidParameter(format!(
                "landmark count {} exceeds metric space size {}",
                indices.len(),
                ambient_size
            )));
        }

        let mut seen = vec![false; ambient_size];
        for &index in &indices {
            if index >= ambient_size {
                return Err(WitnessError::InvalidParameter(format!(
                    "landmark index {} out of range for metric space of size {}",
                    index, ambient_size
                )));
            }
            if seen[index] {
                return Err(WitnessError::InvalidParameter(format!(
                    "duplicate landmark index {}",
                    index
                )));
            }
            seen[index] = true;
        }

        Ok(Self {
            indices,
            ambient_size,
        })
    }

    /// Number of landmarks (vertex count of the witness graph).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Size of the ambient metric space the landmarks were drawn from.
    pub fn ambient_size(&self) -> usize {
        self.ambient_size
    }

    /// Global point index of the landmark with the given local index.
    pub fn global_index(&self, local: usize) -> usize {
        self.indices[local]
    }

    /// Iterate over global indices in selection order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// The full index sequence in selection order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indices_valid() {
        let set = LandmarkSet::from_indices(vec![3, 0, 7], 10).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.ambient_size(), 10);
        assert_eq!(set.global_index(0), 3);
        assert_eq!(set.global_index(2), 7);
        assert_eq!(set.indices(), &[3, 0, 7]);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            LandmarkSet::from_indices(vec![], 5),
            Err(WitnessError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            LandmarkSet::from_indices(vec![0, 5], 5),
            Err(WitnessError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        assert!(matches!(
            LandmarkSet::from_indices(vec![1, 2, 1], 5),
            Err(WitnessError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_oversized() {
        assert!(matches!(
            LandmarkSet::from_indices(vec![0, 1, 2], 2),
            Err(WitnessError::InvalidParameter(_))
        ));
    }
}
