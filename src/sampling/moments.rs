// Sample moments with Bessel correction
//
// Two-pass computation: the mean first, then squared deviations from it.
// Avoids the cancellation of the sum-of-squares shortcut when values sit
// far from zero relative to their spread.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};

/// Mean and unbiased variance of one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
}

impl Moments {
    /// Sample standard deviation (square root of the unbiased variance)
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Reduce a sample to its mean and (N-1)-denominator variance
///
/// # Errors
/// `InvalidSampleSize` when the sample has fewer than 2 values.
///
/// # Example
/// ```
/// use rockstat::sampling::estimate;
///
/// let m = estimate(&[2.0, 4.0, 6.0, 8.0]).unwrap();
/// assert_eq!(m.mean, 5.0);
/// assert!((m.variance - 20.0 / 3.0).abs() < 1e-12);
/// ```
pub fn estimate(sample: &[f64]) -> Result<Moments, StatsError> {
    let variance = sample_variance(sample)?;
    Ok(Moments {
        mean: mean(sample)?,
        variance,
    })
}

/// Arithmetic mean
///
/// # Errors
/// `InvalidSampleSize` for an empty slice.
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::InvalidSampleSize {
            required: 1,
            actual: 0,
        });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Unbiased sample variance (N-1 denominator)
///
/// # Errors
/// `InvalidSampleSize` when fewer than 2 values are given.
pub fn sample_variance(values: &[f64]) -> Result<f64, StatsError> {
    if values.len() < 2 {
        return Err(StatsError::InvalidSampleSize {
            required: 2,
            actual: values.len(),
        });
    }

    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation (square root of [`sample_variance`])
pub fn sample_std_dev(values: &[f64]) -> Result<f64, StatsError> {
    sample_variance(values).map(f64::sqrt)
}
