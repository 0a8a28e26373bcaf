// Student's t distribution
//
// f(t) = Γ((ν+1)/2) / (√(νπ) Γ(ν/2)) · (1 + t²/ν)^(-(ν+1)/2)
//
// Gamma comes from statrs (Lanczos approximation), which handles the
// half-integer arguments odd ν produces.

use crate::error::StatsError;
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::function::gamma as special;
use std::f64::consts::PI;

/// Largest argument for which Γ(x) is evaluated directly. Γ(171.7) overflows f64.
const DIRECT_GAMMA_LIMIT: f64 = 170.0;

/// Gamma function, the continuous extension of (x-1)!
///
/// # Example
/// ```
/// use rockstat::hypothesis::gamma;
///
/// assert!((gamma(5.0) - 24.0).abs() < 1e-9);
/// assert!((gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// ```
pub fn gamma(x: f64) -> f64 {
    special::gamma(x)
}

/// Γ((ν+1)/2) / Γ(ν/2)
///
/// Switches to log space once the numerator would overflow.
fn gamma_ratio(nu: f64) -> f64 {
    let upper = (nu + 1.0) / 2.0;
    let lower = nu / 2.0;
    if upper < DIRECT_GAMMA_LIMIT {
        gamma(upper) / gamma(lower)
    } else {
        (special::ln_gamma(upper) - special::ln_gamma(lower)).exp()
    }
}

/// Probability density of Student's t distribution at `t`
///
/// # Errors
/// `InvalidDegreesOfFreedom` when `degrees_of_freedom == 0`.
///
/// # Example
/// ```
/// use rockstat::hypothesis::density;
///
/// // Cauchy peak: 1/π
/// let peak = density(1, 0.0).unwrap();
/// assert!((peak - 1.0 / std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn density(degrees_of_freedom: u32, t: f64) -> Result<f64, StatsError> {
    if degrees_of_freedom == 0 {
        return Err(StatsError::InvalidDegreesOfFreedom(degrees_of_freedom));
    }

    let nu = f64::from(degrees_of_freedom);
    let coefficient = gamma_ratio(nu) / (nu * PI).sqrt();
    let kernel = (1.0 + t * t / nu).powf(-(nu + 1.0) / 2.0);

    Ok(coefficient * kernel)
}

/// Upper tail probability P(T > t) from the Student's t CDF
///
/// Reported alongside the density-based p-value for cross-validation.
///
/// # Errors
/// `InvalidDegreesOfFreedom` when `degrees_of_freedom == 0`.
pub fn upper_tail_probability(degrees_of_freedom: u32, t: f64) -> Result<f64, StatsError> {
    let dist = StudentsT::new(0.0, 1.0, f64::from(degrees_of_freedom))
        .map_err(|_| StatsError::InvalidDegreesOfFreedom(degrees_of_freedom))?;
    Ok(1.0 - dist.cdf(t))
}
