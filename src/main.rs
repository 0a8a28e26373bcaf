use anyhow::{Context, Result};
use clap::Parser;
use rockstat::cli::{Cli, Command, OutputFormat, SamplingArgs};
use rockstat::experiment::{self, Comparison, SamplingStudy};
use rockstat::json_output::JsonOutput;
use rockstat::ode::OdeSolution;
use rockstat::sampling::SampleBatch;
use rockstat::sieve::{self, SieveResult};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print per-sample moments in draw order
fn print_batch(batch: &SampleBatch) {
    for (i, moments) in batch.iter().enumerate() {
        println!(
            "Sample {}: Mean={}, Variance={}",
            i + 1,
            moments.mean,
            moments.variance
        );
    }
}

fn print_study(study: &SamplingStudy) {
    println!("Sample Mean and Variance:");
    print_batch(&study.batch);
    println!();
    println!("Mean and Variance of Sampling Mean:");
    println!("Mean of Sampling Mean: {}", study.summary.mean_of_means);
    println!(
        "Variance of Sampling Mean: {}",
        study.summary.variance_of_means
    );
}

fn print_comparison(comparison: &Comparison) {
    println!("Supplier A Sample Mean and Variance:");
    print_batch(&comparison.supplier_a);
    println!();
    println!("Supplier B Sample Mean and Variance:");
    print_batch(&comparison.supplier_b);
    println!();
    print!("{}", comparison.result.to_report_string());
}

fn print_sieve(result: &SieveResult) {
    println!("Passed 1\" x 1\" screen: {:?}", result.passed_large);
    println!("Passed 3/8\" x 3/8\" screen: {:?}", result.passed_small);
}

fn print_ode(solution: &OdeSolution) {
    println!("For the initial value problem y'' - y = x");
    println!("At x={}", solution.target_x);
    println!("For the Improved Euler method:");
    println!(
        "y={:.3}, and y'={:.3}",
        solution.improved_euler.y, solution.improved_euler.dy
    );
    println!("For the Runge-Kutta method:");
    println!(
        "y={:.3}, and y'={:.3}",
        solution.runge_kutta.y, solution.runge_kutta.dy
    );
}

fn run_sample(args: &SamplingArgs) -> Result<()> {
    let config = args.config();
    let study = experiment::study_sampling_mean(&mut experiment::rng_for(&config), &config)
        .context("Sampling study failed")?;

    match args.format {
        OutputFormat::Text => print_study(&study),
        OutputFormat::Json => {
            let mut output = JsonOutput::new();
            output.set_sampling(&study);
            println!("{}", output.to_json()?);
        }
    }
    Ok(())
}

fn run_compare(args: &SamplingArgs) -> Result<()> {
    let config = args.config();
    let comparison = experiment::compare_suppliers(&mut experiment::rng_for(&config), &config)
        .context("Supplier comparison failed")?;

    match args.format {
        OutputFormat::Text => print_comparison(&comparison),
        OutputFormat::Json => {
            let mut output = JsonOutput::new();
            output.set_comparison(&comparison);
            println!("{}", output.to_json()?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    match args.command {
        Command::Sample(ref sampling) => run_sample(sampling)?,
        Command::Compare(ref sampling) => run_compare(sampling)?,
        Command::Sieve { sizes, format } => {
            let result = sieve::sieve(&sizes);
            match format {
                OutputFormat::Text => print_sieve(&result),
                OutputFormat::Json => {
                    let mut output = JsonOutput::new();
                    output.set_sieve(result);
                    println!("{}", output.to_json()?);
                }
            }
        }
        Command::Ode {
            y0,
            dy0,
            step,
            target,
            format,
        } => {
            let solution =
                rockstat::ode::solve(y0, dy0, step, target).context("ODE integration failed")?;
            match format {
                OutputFormat::Text => print_ode(&solution),
                OutputFormat::Json => {
                    let mut output = JsonOutput::new();
                    output.set_ode(solution);
                    println!("{}", output.to_json()?);
                }
            }
        }
    }

    Ok(())
}
