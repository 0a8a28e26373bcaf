// Repeated sampling into per-supplier batches

use crate::error::StatsError;
use crate::sampling::moments::{estimate, mean, sample_variance, Moments};
use crate::sampling::sampler::generate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-sample means and variances for one supplier, in draw order
///
/// Invariant: `means.len() == variances.len()`. Fields are private so the
/// two sequences can only be built together, and deserialization goes
/// through [`SampleBatch::from_parts`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "BatchParts")]
pub struct SampleBatch {
    means: Vec<f64>,
    variances: Vec<f64>,
}

/// Unchecked wire form of a [`SampleBatch`]
#[derive(Deserialize)]
struct BatchParts {
    means: Vec<f64>,
    variances: Vec<f64>,
}

impl TryFrom<BatchParts> for SampleBatch {
    type Error = StatsError;

    fn try_from(parts: BatchParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts.means, parts.variances)
    }
}

/// Mean and variance of the sampling mean across a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingSummary {
    pub mean_of_means: f64,
    pub variance_of_means: f64,
}

impl SampleBatch {
    /// Build a batch from precomputed sequences
    ///
    /// # Errors
    /// `InvalidSampleSize` when the two sequences differ in length.
    pub fn from_parts(means: Vec<f64>, variances: Vec<f64>) -> Result<Self, StatsError> {
        if means.len() != variances.len() {
            return Err(StatsError::InvalidSampleSize {
                required: means.len(),
                actual: variances.len(),
            });
        }
        Ok(Self { means, variances })
    }

    fn push(&mut self, moments: Moments) {
        self.means.push(moments.mean);
        self.variances.push(moments.variance);
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn variances(&self) -> &[f64] {
        &self.variances
    }

    /// Number of samples in the batch
    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Iterate over (mean, variance) pairs in draw order
    pub fn iter(&self) -> impl Iterator<Item = Moments> + '_ {
        self.means
            .iter()
            .zip(&self.variances)
            .map(|(&mean, &variance)| Moments { mean, variance })
    }

    /// Mean and Bessel-corrected variance of the sample means
    ///
    /// # Errors
    /// `InvalidSampleSize` when the batch has fewer than 2 samples.
    pub fn summary(&self) -> Result<SamplingSummary, StatsError> {
        let variance_of_means = sample_variance(&self.means)?;
        Ok(SamplingSummary {
            mean_of_means: mean(&self.means)?,
            variance_of_means,
        })
    }
}

/// Draw `num_samples` independent samples of `count_per_sample` rocks
///
/// Each sample is reduced to its moments immediately and discarded.
///
/// # Errors
/// `InvalidSampleSize` when `count_per_sample < 2`.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rockstat::sampling::repeat;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let batch = repeat(&mut rng, 100, 11).unwrap();
/// assert_eq!(batch.means().len(), 11);
/// assert_eq!(batch.variances().len(), 11);
/// ```
pub fn repeat<R: Rng + ?Sized>(
    rng: &mut R,
    count_per_sample: usize,
    num_samples: usize,
) -> Result<SampleBatch, StatsError> {
    let mut batch = SampleBatch {
        means: Vec::with_capacity(num_samples),
        variances: Vec::with_capacity(num_samples),
    };

    for index in 0..num_samples {
        let rocks = generate(rng, count_per_sample);
        let moments = estimate(&rocks)?;
        tracing::trace!(
            sample = index + 1,
            mean = moments.mean,
            variance = moments.variance,
            "sample reduced"
        );
        batch.push(moments);
    }

    tracing::debug!(count_per_sample, num_samples, "sample batch drawn");

    Ok(batch)
}
