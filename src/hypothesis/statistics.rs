// Two-sample t-statistic with a Welch standard error
//
// t = (mean_a - mean_b) / sqrt(sd_a^2 / n_a + sd_b^2 / n_b)
//
// Each group keeps its own variance; no pooled estimator is formed.

use crate::error::StatsError;

/// Compute the t-statistic for two independent groups
///
/// # Arguments
/// * `mean_a`, `mean_b` - group means
/// * `std_dev_a`, `std_dev_b` - group sample standard deviations
/// * `n_a`, `n_b` - group sizes
///
/// # Errors
/// - `InvalidSampleSize` when either group size is zero
/// - `DegenerateVariance` when the standard error is not strictly positive
/// - `NonFiniteInput` when overflowing inputs leave t undefined
///
/// # Example
/// ```
/// use rockstat::hypothesis::t_statistic;
///
/// let t = t_statistic(0.51, 0.40, 0.0158, 0.0158, 5, 5).unwrap();
/// assert!(t > 10.0);
/// ```
pub fn t_statistic(
    mean_a: f64,
    mean_b: f64,
    std_dev_a: f64,
    std_dev_b: f64,
    n_a: usize,
    n_b: usize,
) -> Result<f64, StatsError> {
    for n in [n_a, n_b] {
        if n == 0 {
            return Err(StatsError::InvalidSampleSize {
                required: 1,
                actual: 0,
            });
        }
    }

    let standard_error =
        ((std_dev_a * std_dev_a) / n_a as f64 + (std_dev_b * std_dev_b) / n_b as f64).sqrt();

    if standard_error.is_nan() || standard_error <= 0.0 {
        return Err(StatsError::DegenerateVariance);
    }

    let t = (mean_a - mean_b) / standard_error;
    if t.is_nan() {
        return Err(StatsError::NonFiniteInput);
    }

    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_statistic_known_value() {
        // se = sqrt(0.0004/4 + 0.0004/4) = sqrt(0.0002)
        let t = t_statistic(0.52, 0.50, 0.02, 0.02, 4, 4).unwrap();
        assert!((t - 0.02 / 0.0002_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_t_statistic_zero_for_equal_means() {
        let t = t_statistic(0.5, 0.5, 0.1, 0.2, 10, 12).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_t_statistic_antisymmetric() {
        let forward = t_statistic(0.55, 0.48, 0.03, 0.05, 11, 9).unwrap();
        let backward = t_statistic(0.48, 0.55, 0.05, 0.03, 9, 11).unwrap();
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn test_t_statistic_one_zero_std_dev_is_fine() {
        let t = t_statistic(0.6, 0.5, 0.0, 0.1, 5, 4).unwrap();
        assert!((t - 0.1 / 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_t_statistic_degenerate_variance() {
        assert_eq!(
            t_statistic(0.5, 0.5, 0.0, 0.0, 10, 10),
            Err(StatsError::DegenerateVariance)
        );
    }

    #[test]
    fn test_t_statistic_nan_std_dev_is_degenerate() {
        assert_eq!(
            t_statistic(0.5, 0.4, f64::NAN, 0.1, 10, 10),
            Err(StatsError::DegenerateVariance)
        );
    }

    #[test]
    fn test_t_statistic_infinite_inputs() {
        assert_eq!(
            t_statistic(f64::INFINITY, f64::INFINITY, f64::INFINITY, 0.1, 10, 10),
            Err(StatsError::NonFiniteInput)
        );
    }

    #[test]
    fn test_t_statistic_zero_group_size() {
        assert!(matches!(
            t_statistic(0.5, 0.4, 0.1, 0.1, 0, 10),
            Err(StatsError::InvalidSampleSize { .. })
        ));
    }
}
