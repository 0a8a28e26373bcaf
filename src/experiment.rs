//! Sampling experiments driven by a [`SamplingConfig`]
//!
//! Two runs are supported: a single-supplier study of the sampling mean, and
//! a two-supplier comparison feeding the one-sided t-test.

use crate::config::SamplingConfig;
use crate::error::StatsError;
use crate::hypothesis::{decide, TestResult};
use crate::sampling::{repeat, SampleBatch, SamplingSummary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One supplier's batch and the statistics of its sampling mean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingStudy {
    pub config: SamplingConfig,
    pub batch: SampleBatch,
    pub summary: SamplingSummary,
}

/// Both suppliers' batches and the test outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub config: SamplingConfig,
    pub supplier_a: SampleBatch,
    pub supplier_b: SampleBatch,
    pub result: TestResult,
}

/// Build the random source for a configuration
///
/// A configured seed gives a reproducible `StdRng`; otherwise it is seeded
/// from OS entropy.
pub fn rng_for(config: &SamplingConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw one batch and summarize its sampling mean
pub fn study_sampling_mean<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SamplingConfig,
) -> Result<SamplingStudy, StatsError> {
    config.validate()?;

    let batch = repeat(rng, config.rocks_per_sample, config.num_samples)?;
    let summary = batch.summary()?;

    tracing::debug!(
        mean_of_means = summary.mean_of_means,
        variance_of_means = summary.variance_of_means,
        "sampling mean summarized"
    );

    Ok(SamplingStudy {
        config: config.clone(),
        batch,
        summary,
    })
}

/// Draw a batch for supplier A, then one for supplier B, and test B < A
///
/// Both batches come from the same generator in sequence, so they are
/// independent draws from the same model.
///
/// # Example
/// ```
/// use rockstat::config::SamplingConfig;
/// use rockstat::experiment::{compare_suppliers, rng_for};
///
/// let config = SamplingConfig::quick().with_seed(42);
/// let comparison = compare_suppliers(&mut rng_for(&config), &config).unwrap();
/// assert_eq!(comparison.result.degrees_of_freedom, 8);
/// ```
pub fn compare_suppliers<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SamplingConfig,
) -> Result<Comparison, StatsError> {
    config.validate()?;

    let supplier_a = repeat(rng, config.rocks_per_sample, config.num_samples)?;
    let supplier_b = repeat(rng, config.rocks_per_sample, config.num_samples)?;
    let result = decide(supplier_a.means(), supplier_b.means())?;

    Ok(Comparison {
        config: config.clone(),
        supplier_a,
        supplier_b,
        result,
    })
}
