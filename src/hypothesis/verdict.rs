// Supplier comparison verdict
//
// Reduces two sequences of sample means to per-group summaries, runs the
// t-statistic and density, and applies the one-sided halving convention:
//
//   p = density(n_a + n_b - 2, t) / 2,  decision = p < 0.05
//
// A true decision reads "supplier B is significantly smaller than A".

use crate::config::SIGNIFICANCE_LEVEL;
use crate::error::StatsError;
use crate::hypothesis::distribution::{density, upper_tail_probability};
use crate::hypothesis::statistics::t_statistic;
use crate::sampling::{mean, sample_std_dev};
use serde::{Deserialize, Serialize};

/// Outcome of the one-sided supplier comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Mean of supplier A's sample means
    pub mean_a: f64,
    /// Mean of supplier B's sample means
    pub mean_b: f64,
    /// Standard deviation of supplier A's sample means (N-1)
    pub std_dev_a: f64,
    /// Standard deviation of supplier B's sample means (N-1)
    pub std_dev_b: f64,
    pub n_a: usize,
    pub n_b: usize,

    /// Welch-denominator t-statistic, positive when A's mean is larger
    pub t_statistic: f64,

    /// n_a + n_b - 2
    pub degrees_of_freedom: u32,

    /// Density at t, halved. Drives the decision.
    pub p_value: f64,

    /// P(T > t) from the t CDF. Informational only.
    pub tail_probability: f64,

    /// `p_value < 0.05`
    pub decision: bool,
}

impl TestResult {
    /// One-sentence outcome in supplier terms
    pub fn verdict(&self) -> &'static str {
        if self.decision {
            "Supplier B's gravel size is statistically significantly smaller than Supplier A's."
        } else {
            "Supplier B's gravel size is not statistically significantly smaller than Supplier A's."
        }
    }

    /// Significant by density while supplier B's mean is the larger one
    ///
    /// The halved density is symmetric in t, so a large negative t also
    /// passes the threshold.
    pub fn contradicts_direction(&self) -> bool {
        self.decision && self.t_statistic < 0.0
    }

    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        if self.decision {
            report.push_str("SIGNIFICANT: B < A\n\n");
        } else {
            report.push_str("NOT SIGNIFICANT\n\n");
        }

        report.push_str(&format!(
            "Supplier A: mean={:.6}, std_dev={:.6}, n={}\n",
            self.mean_a, self.std_dev_a, self.n_a
        ));
        report.push_str(&format!(
            "Supplier B: mean={:.6}, std_dev={:.6}, n={}\n",
            self.mean_b, self.std_dev_b, self.n_b
        ));
        report.push_str(&format!("t-statistic: {:.4}\n", self.t_statistic));
        report.push_str(&format!("Degrees of freedom: {}\n", self.degrees_of_freedom));
        report.push_str(&format!(
            "p-value (density / 2): {:.6} (alpha = {})\n",
            self.p_value, SIGNIFICANCE_LEVEL
        ));
        report.push_str(&format!(
            "Upper tail probability P(T > t): {:.6}\n",
            self.tail_probability
        ));
        if self.contradicts_direction() {
            report.push_str("Caution: supplier B's mean is larger (t < 0)\n");
        }
        report.push('\n');
        report.push_str(self.verdict());
        report.push('\n');

        report
    }
}

/// Run the one-sided t-test on two sequences of sample means
///
/// # Arguments
/// * `sample_means_a` - Sample means drawn from supplier A
/// * `sample_means_b` - Sample means drawn from supplier B
///
/// # Errors
/// - `InvalidSampleSize` when either sequence has fewer than 2 entries
/// - `DegenerateVariance` when both sequences are constant
/// - `NonFiniteInput` when any sample mean is NaN or infinite
///
/// # Example
/// ```
/// use rockstat::hypothesis::decide;
///
/// let a = [0.52, 0.51, 0.50, 0.49, 0.53];
/// let b = [0.40, 0.41, 0.39, 0.42, 0.38];
///
/// let result = decide(&a, &b).unwrap();
/// assert!(result.t_statistic > 10.0);
/// assert!(result.decision);
/// ```
pub fn decide(sample_means_a: &[f64], sample_means_b: &[f64]) -> Result<TestResult, StatsError> {
    let std_dev_a = sample_std_dev(sample_means_a)?;
    let std_dev_b = sample_std_dev(sample_means_b)?;

    if sample_means_a
        .iter()
        .chain(sample_means_b)
        .any(|v| !v.is_finite())
    {
        return Err(StatsError::NonFiniteInput);
    }

    let mean_a = mean(sample_means_a)?;
    let mean_b = mean(sample_means_b)?;
    let n_a = sample_means_a.len();
    let n_b = sample_means_b.len();

    let t = t_statistic(mean_a, mean_b, std_dev_a, std_dev_b, n_a, n_b)?;

    let degrees_of_freedom = u32::try_from(n_a + n_b - 2).map_err(|_| {
        StatsError::InvalidSampleSize {
            required: 2,
            actual: n_a + n_b,
        }
    })?;

    let p_value = density(degrees_of_freedom, t)? / 2.0;
    let tail_probability = upper_tail_probability(degrees_of_freedom, t)?;
    let decision = p_value < SIGNIFICANCE_LEVEL;

    tracing::info!(
        t_statistic = t,
        degrees_of_freedom,
        p_value,
        tail_probability,
        decision,
        "one-sided t-test complete"
    );

    let result = TestResult {
        mean_a,
        mean_b,
        std_dev_a,
        std_dev_b,
        n_a,
        n_b,
        t_statistic: t,
        degrees_of_freedom,
        p_value,
        tail_probability,
        decision,
    };

    if result.contradicts_direction() {
        tracing::warn!(
            t_statistic = t,
            "significant by density but supplier B's mean is larger"
        );
    }

    Ok(result)
}
