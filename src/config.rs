//! Configuration for repeated rock-size sampling
//!
//! Only the sampling shape is configurable. The normal model and the
//! significance level are fixed constants.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};

/// Mean rock diameter of the fixed normal model (inches)
pub const ROCK_SIZE_MEAN: f64 = 0.5;

/// Standard deviation of the fixed normal model (inches)
pub const ROCK_SIZE_STD_DEV: f64 = 0.1;

/// One-sided significance level (alpha) for the supplier comparison
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Configuration for drawing sample batches
///
/// # Example
/// ```
/// use rockstat::config::SamplingConfig;
///
/// let config = SamplingConfig::default();
/// assert_eq!(config.rocks_per_sample, 100);
/// assert_eq!(config.num_samples, 11);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Number of rocks measured in each sample (N)
    ///
    /// Must be at least 2 so the Bessel-corrected variance is defined.
    pub rocks_per_sample: usize,

    /// Number of samples drawn per supplier
    ///
    /// Must be at least 2 so the standard deviation of the sample means
    /// is defined for the t-test.
    pub num_samples: usize,

    /// Seed for the random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            rocks_per_sample: 100,
            num_samples: 11,
            seed: None,
        }
    }
}

impl SamplingConfig {
    /// Small batches for smoke runs
    pub fn quick() -> Self {
        Self {
            rocks_per_sample: 30,
            num_samples: 5,
            seed: None,
        }
    }

    /// Large batches for a tighter estimate of the sampling mean
    pub fn thorough() -> Self {
        Self {
            rocks_per_sample: 500,
            num_samples: 30,
            seed: None,
        }
    }

    /// Same configuration with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.rocks_per_sample < 2 {
            return Err(StatsError::InvalidConfig(format!(
                "rocks_per_sample must be >= 2 for sample variance, got {}",
                self.rocks_per_sample
            )));
        }

        if self.num_samples < 2 {
            return Err(StatsError::InvalidConfig(format!(
                "num_samples must be >= 2 for t-test, got {}",
                self.num_samples
            )));
        }

        Ok(())
    }
}
