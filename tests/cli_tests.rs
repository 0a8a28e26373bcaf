//! CLI integration tests for the rockstat binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use predicates::prelude::*;

#[test]
fn test_sample_prints_per_sample_moments() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.arg("sample")
        .arg("--seed")
        .arg("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Mean and Variance:"))
        .stdout(predicate::str::contains("Sample 1: Mean="))
        .stdout(predicate::str::contains("Sample 11: Mean="))
        .stdout(predicate::str::contains("Sample 12:").not())
        .stdout(predicate::str::contains("Variance of Sampling Mean:"));
}

#[test]
fn test_sample_seed_is_reproducible() {
    let run = || {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
        let output = cmd
            .args(["sample", "-n", "20", "-s", "4", "--seed", "7"])
            .output()
            .unwrap();
        assert!(output.status.success());
        output.stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_compare_prints_verdict() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.args(["compare", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Supplier A Sample Mean and Variance:"))
        .stdout(predicate::str::contains("Supplier B Sample Mean and Variance:"))
        .stdout(predicate::str::contains("Degrees of freedom: 20"))
        .stdout(predicate::str::contains("statistically significantly smaller than Supplier A's."));
}

#[test]
fn test_compare_json_output() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    let output = cmd
        .args(["compare", "-s", "5", "--seed", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["format"], "rockstat-json-v1");
    assert_eq!(value["comparison"]["result"]["degrees_of_freedom"], 8);
    assert_eq!(value["comparison"]["supplier_a"].as_array().unwrap().len(), 5);
    assert!(value["comparison"]["verdict"].is_string());
}

#[test]
fn test_compare_rejects_single_sample() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.args(["compare", "-s", "1", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("num_samples must be >= 2"));
}

#[test]
fn test_sample_rejects_single_rock() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.args(["sample", "-n", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rocks_per_sample must be >= 2"));
}

#[test]
fn test_sieve_text_output() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.args(["sieve", "0.3", "1.2", "0.9", "0.37"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Passed 1\" x 1\" screen: [1.2]"))
        .stdout(predicate::str::contains("Passed 3/8\" x 3/8\" screen: [0.3, 0.37]"));
}

#[test]
fn test_sieve_json_output() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    let output = cmd
        .args(["sieve", "--format", "json", "1.0", "0.375"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sieve"]["passed_large"][0], 1.0);
    assert_eq!(value["sieve"]["passed_small"].as_array().unwrap().len(), 0);
}

#[test]
fn test_ode_text_output() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.args(["ode", "--y0", "1", "--dy0", "0", "--step", "0.1", "--target", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("At x=1"))
        .stdout(predicate::str::contains("For the Improved Euler method:"))
        .stdout(predicate::str::contains("For the Runge-Kutta method:"))
        // Exact: y = e^x - x, so y(1) = 1.718
        .stdout(predicate::str::contains("y=1.718"));
}

#[test]
fn test_ode_rejects_zero_step() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.args(["ode", "--y0", "1", "--dy0", "0", "--step", "0", "--target", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid step size"));
}

#[test]
fn test_ode_rejects_step_too_small_for_target() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.args(["ode", "--y0", "1", "--dy0", "0", "--step", "1e-12", "--target", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step limit exceeded"));
}

#[test]
fn test_sample_quick_preset() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.args(["sample", "--preset", "quick", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample 5: Mean="))
        .stdout(predicate::str::contains("Sample 6:").not());
}

#[test]
fn test_compare_preset_with_override_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    let output = cmd
        .args(["compare", "--preset", "thorough", "-n", "20", "--seed", "8", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["comparison"]["result"]["degrees_of_freedom"], 58);
}

#[test]
fn test_debug_flag_emits_tracing() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockstat");
    cmd.args(["--debug", "compare", "-s", "3", "--seed", "9"])
        .assert()
        .success()
        .stderr(predicate::str::contains("one-sided t-test complete"));
}
