//! JSON output format for rockstat results
//!
//! `--format json` implementation. One document per invocation, with only
//! the section for the command that ran.

use crate::experiment::{Comparison, SamplingStudy};
use crate::hypothesis::TestResult;
use crate::ode::OdeSolution;
use crate::sampling::SampleBatch;
use crate::sieve::SieveResult;
use serde::{Deserialize, Serialize};

/// One sample's moments, numbered from 1 in draw order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSample {
    pub index: usize,
    pub mean: f64,
    pub variance: f64,
}

/// Sampling-mean study (`sample` command)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSamplingReport {
    pub rocks_per_sample: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub samples: Vec<JsonSample>,
    pub mean_of_means: f64,
    pub variance_of_means: f64,
}

/// Supplier comparison (`compare` command)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonComparisonReport {
    pub rocks_per_sample: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub supplier_a: Vec<JsonSample>,
    pub supplier_b: Vec<JsonSample>,
    pub result: TestResult,
    pub verdict: String,
}

/// Complete JSON output document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling: Option<JsonSamplingReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<JsonComparisonReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sieve: Option<SieveResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ode: Option<OdeSolution>,
}

fn json_samples(batch: &SampleBatch) -> Vec<JsonSample> {
    batch
        .iter()
        .enumerate()
        .map(|(i, m)| JsonSample {
            index: i + 1,
            mean: m.mean,
            variance: m.variance,
        })
        .collect()
}

impl JsonOutput {
    /// Create an empty JSON output structure
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "rockstat-json-v1".to_string(),
            sampling: None,
            comparison: None,
            sieve: None,
            ode: None,
        }
    }

    pub fn set_sampling(&mut self, study: &SamplingStudy) {
        self.sampling = Some(JsonSamplingReport {
            rocks_per_sample: study.config.rocks_per_sample,
            seed: study.config.seed,
            samples: json_samples(&study.batch),
            mean_of_means: study.summary.mean_of_means,
            variance_of_means: study.summary.variance_of_means,
        });
    }

    pub fn set_comparison(&mut self, comparison: &Comparison) {
        self.comparison = Some(JsonComparisonReport {
            rocks_per_sample: comparison.config.rocks_per_sample,
            seed: comparison.config.seed,
            supplier_a: json_samples(&comparison.supplier_a),
            supplier_b: json_samples(&comparison.supplier_b),
            result: comparison.result.clone(),
            verdict: comparison.result.verdict().to_string(),
        });
    }

    pub fn set_sieve(&mut self, result: SieveResult) {
        self.sieve = Some(result);
    }

    pub fn set_ode(&mut self, solution: OdeSolution) {
        self.ode = Some(solution);
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}
