//! Error types shared by the sampling, hypothesis and ODE modules

use thiserror::Error;

/// Errors for statistical and numerical operations
///
/// Every variant is terminal for the computation that raised it: inputs are
/// deterministic, so retrying with the same values cannot succeed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Invalid sample size: need at least {required} values, got {actual}")]
    InvalidSampleSize { required: usize, actual: usize },

    #[error("Degenerate variance: combined standard error is zero")]
    DegenerateVariance,

    #[error("Non-finite input: statistics require finite values")]
    NonFiniteInput,

    #[error("Invalid degrees of freedom: {0} (must be > 0)")]
    InvalidDegreesOfFreedom(u32),

    #[error("Invalid step size: {0} (must be finite and > 0)")]
    InvalidStepSize(f64),

    #[error("Invalid target: {0} (must be finite and >= 0)")]
    InvalidTarget(f64),

    #[error("Step limit exceeded: target needs more than {limit} steps")]
    StepLimitExceeded { limit: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
