//! # lazy-witness
//!
//! Weighted 1-skeleton of the *lazy witness complex*, plus max-min
//! landmark selection, for topological data analysis pipelines.
//!
//! ## Why witness complexes
//!
//! Distance-based complexes (Čech, Vietoris-Rips) over a large point
//! cloud are prohibitively expensive: every point becomes a vertex. The
//! witness construction of de Silva & Carlsson ("Topological estimation
//! using witness complexes", SPBG 2004) instead picks a small set of
//! *landmark* points as vertices and lets the remaining points act as
//! *witnesses* that certify which landmark pairs should be connected.
//! The lazy variant is fully determined by its 1-skeleton, so this crate
//! produces everything a downstream expansion stage needs: a weighted
//! graph on the landmarks.
//!
//! ## Pipeline
//!
//! 1. Wrap your data as a [`FiniteMetricSpace`] — a point count and a
//!    pure pairwise distance query over indices. [`EuclideanSpace`] and
//!    [`ExplicitSpace`] cover the common cases.
//! 2. Select landmarks with [`MaxMinSelector`] (farthest-point sampling,
//!    seeded RNG for reproducibility), or supply your own via
//!    [`LandmarkSet::from_indices`].
//! 3. Build the witness graph with [`LazyWitnessBuilder`].
//!
//! ```
//! use lazy_witness::{
//!     EuclideanSpace, LazyWitnessBuilder, LazyWitnessParams, MaxMinSelector,
//! };
//! use ndarray::array;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let space = EuclideanSpace::new(array![
//!     [0.0, 0.0],
//!     [1.0, 0.0],
//!     [2.0, 0.0],
//!     [3.0, 0.0],
//! ]);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let selection = MaxMinSelector::new(&space).select(3, &mut rng).unwrap();
//!
//! let params = LazyWitnessParams {
//!     nu: 1,
//!     ..LazyWitnessParams::default()
//! };
//! let graph = LazyWitnessBuilder::new(&space, &selection.landmarks, params)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.vertex_count(), 3);
//! ```

pub mod error;
pub mod graph;
pub mod landmark;
pub mod metric;
pub mod witness;

pub use error::{Result, WitnessError};
pub use graph::WeightedGraph;
pub use landmark::{LandmarkSet, MaxMinSelection, MaxMinSelector};
pub use metric::{EuclideanSpace, ExplicitSpace, FiniteMetricSpace};
pub use witness::{LazyWitnessBuilder, LazyWitnessParams, RadiusPolicy};
