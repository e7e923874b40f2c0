//! Lazy Witness Complex: Weighted 1-Skeleton Construction
//!
//! Implements the edge computation of the lazy witness complex from
//! "Topological estimation using witness complexes" (de Silva &
//! Carlsson, 2004). A lazy witness complex is fully determined by its
//! 1-skeleton, so constructing the weighted landmark graph is the whole
//! of the construction; expanding it into a filtered simplicial complex
//! is a separate downstream stage.
//!
//! ## Mathematical Background
//!
//! Let N be the number of points in the metric space and n the number of
//! landmarks, and let D be the n × N matrix of landmark-to-point
//! distances.
//!
//! - For `nu = 0`, define `m_i = 0`; otherwise `m_i` is the `nu`-th
//!   smallest entry of the i-th column of D (each point relaxes the
//!   complex by the distance to its `nu`-th nearest landmark).
//! - For each landmark pair (a, b), the witness radius is
//!   `R_ab = max(min_k max(D(a,k), D(b,k)) − m_{k•}, 0)`, the smallest
//!   relaxation at which some witness point sees both landmarks. The
//!   edge enters the graph iff `R_ab ≤ max_distance`.
//!
//! The choice of `k•` — which witness contributes its `m` value — is
//! configurable via [`RadiusPolicy`]; see its documentation for the
//! history behind the two options.

mod builder;
mod rank;

pub use builder::{LazyWitnessBuilder, LazyWitnessParams, RadiusPolicy};
