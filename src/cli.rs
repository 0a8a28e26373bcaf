//! CLI argument parsing for rockstat

use crate::config::SamplingConfig;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rockstat")]
#[command(version)]
#[command(about = "Rock-size sampling and one-sided supplier t-test", long_about = None)]
pub struct Cli {
    /// Enable debug tracing output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw repeated samples and report the mean and variance of the sampling mean
    Sample(SamplingArgs),

    /// Sample two suppliers and test whether B's rocks are significantly smaller
    Compare(SamplingArgs),

    /// Sort rock sizes through the 1" and 3/8" mesh screens
    Sieve {
        /// Rock sizes in inches
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        sizes: Vec<f64>,

        /// Output format (text or json)
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Solve y'' = x + y with Improved Euler and Runge-Kutta
    Ode {
        /// Value of y at x = 0
        #[arg(long = "y0", allow_negative_numbers = true)]
        y0: f64,

        /// Value of y' at x = 0
        #[arg(long = "dy0", allow_negative_numbers = true)]
        dy0: f64,

        /// Step size for the numerical solution
        #[arg(long = "step")]
        step: f64,

        /// Value of x at which to report y and y'
        #[arg(long = "target")]
        target: f64,

        /// Output format (text or json)
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Named sampling configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 100 rocks per sample, 11 samples (default)
    Default,
    /// 30 rocks per sample, 5 samples
    Quick,
    /// 500 rocks per sample, 30 samples
    Thorough,
}

impl Preset {
    pub fn config(self) -> SamplingConfig {
        match self {
            Preset::Default => SamplingConfig::default(),
            Preset::Quick => SamplingConfig::quick(),
            Preset::Thorough => SamplingConfig::thorough(),
        }
    }
}

/// Options shared by the sampling commands
#[derive(Args, Debug, Clone)]
pub struct SamplingArgs {
    /// Starting configuration, refined by --rocks and --samples
    #[arg(long = "preset", value_enum, default_value = "default")]
    pub preset: Preset,

    /// Number of rocks in each sample (overrides the preset)
    #[arg(short = 'n', long = "rocks", value_name = "N")]
    pub rocks: Option<usize>,

    /// Number of samples per supplier (overrides the preset)
    #[arg(short = 's', long = "samples", value_name = "K")]
    pub samples: Option<usize>,

    /// Seed for a reproducible run (default: OS entropy)
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl SamplingArgs {
    /// Sampling configuration described by these flags
    pub fn config(&self) -> SamplingConfig {
        let preset = self.preset.config();
        SamplingConfig {
            rocks_per_sample: self.rocks.unwrap_or(preset.rocks_per_sample),
            num_samples: self.samples.unwrap_or(preset.num_samples),
            seed: self.seed,
        }
    }
}
