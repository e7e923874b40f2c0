//! Landmark Selection: Representative Vertex Sets for Witness Complexes
//!
//! A witness complex is built on a small set of landmark points standing
//! in for the full cloud. This module provides:
//!
//! - [`LandmarkSet`]: an ordered, immutable set of distinct point indices
//!   with the local↔global index bijection the edge builder needs.
//! - [`MaxMinSelector`]: sequential max-min (farthest-point) sampling.
//!   Suppose {l_0, ..., l_{i-1}} have been chosen. Define
//!   f(z) = min{d(z, l_0), ..., d(z, l_{i-1})} and take
//!   l_i = argmax f(z), starting from a uniformly random l_0.
//!
//! Max-min landmarks are spread out as far as possible, which makes them
//! good covers: the max-min value achieved at each pick is exactly the
//! covering radius of the landmark set so far, and it never increases.

mod max_min;
mod set;

pub use max_min::{MaxMinSelection, MaxMinSelector};
pub use set::LandmarkSet;
