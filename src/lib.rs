//! Rockstat - rock-size sampling and one-sided supplier t-test
//!
//! This library draws repeated samples of rock diameters from a fixed
//! normal model, reduces them to sample means and variances, and tests
//! whether one supplier's gravel is significantly smaller than another's
//! using a Student's t density. A mesh-screen sieve and an ODE solver for
//! y'' = x + y ship alongside.

pub mod cli;
pub mod config;
pub mod error;
pub mod experiment;
pub mod hypothesis;
pub mod json_output;
pub mod ode;
pub mod sampling;
pub mod sieve;

pub use error::StatsError;
