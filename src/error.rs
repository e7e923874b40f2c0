//! Error taxonomy for landmark selection and witness-graph construction.
//!
//! All validation is eager: parameter errors are raised at construction,
//! before any O(n²·N) scanning begins, and metric errors are raised the
//! first time a malformed distance is observed. Computation is pure and
//! deterministic, so every error is terminal — nothing is retried and no
//! partial graph is returned.

use thiserror::Error;

/// Errors produced by landmark selection and witness edge construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WitnessError {
    /// A construction parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The metric space returned a distance that is not a valid metric
    /// value (negative or NaN).
    #[error("invalid metric: distance({i}, {j}) = {value}")]
    InvalidMetric { i: usize, j: usize, value: f64 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WitnessError>;
