// One-sided two-sample t-test between rock suppliers
//
// Decides whether supplier B's mean rock size is significantly smaller than
// supplier A's, given the sample means of repeated draws from each.
//
// Pipeline:
// - statistics: Welch-denominator t-statistic from per-group summaries
// - distribution: Student's t density via the Gamma function, plus the
//   CDF-based upper tail probability for cross-checking
// - verdict: p = density(df, t) / 2 compared against alpha = 0.05
//
// The p-value is a density evaluation, not a tail integral. The tail
// probability is reported next to it but never drives the decision.

mod distribution;
mod statistics;
mod verdict;

pub use distribution::{density, gamma, upper_tail_probability};
pub use statistics::t_statistic;
pub use verdict::{decide, TestResult};
