use assert_cmd::prelude::*;
use banksim_core::engine::{compute_result_with, CalcContext, CalculatorKind, SimulatorResult};
use banksim_core::testing::sample_inputs;
use chrono::NaiveDate;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::{tempdir, TempDir};

const TODAY: &str = "2025-01-20";

fn bsim(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["calc", "--batch", "--no-delay", "--today", TODAY]);
    cmd
}

fn today() -> NaiveDate {
    NaiveDate::parse_from_str(TODAY, "%Y-%m-%d").unwrap()
}

#[test]
fn every_calculator_matches_the_library() {
    let tmp = tempdir().unwrap();
    for kind in CalculatorKind::ALL {
        let inputs = sample_inputs(kind, today());
        let mut cmd = bsim(&tmp);
        cmd.arg(kind.module_id()).arg("--json");
        for (name, value) in inputs.iter() {
            cmd.arg("--set").arg(format!("{name}={value}"));
        }

        let assert = cmd.assert().success();
        let printed: SimulatorResult =
            serde_json::from_slice(&assert.get_output().stdout).unwrap();
        let expected =
            compute_result_with(kind.module_id(), &inputs, &CalcContext::on(today())).unwrap();
        assert_eq!(printed, expected, "{kind:?}");
    }
}

#[test]
fn reserve_ratio_text_output() {
    let tmp = tempdir().unwrap();
    bsim(&tmp)
        .args(["rbi-functions", "--set", "deposits=1000", "--set", "crr_rate=4", "--set", "slr_rate=18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reserve Bank of India (RBI)"))
        .stdout(predicate::str::contains("Result: ₹780"))
        .stdout(predicate::str::contains(" 7. Available for Lending"));
}

#[test]
fn missing_required_input_in_batch_mode() {
    let tmp = tempdir().unwrap();
    bsim(&tmp)
        .args(["rbi-functions", "--set", "deposits=1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required input: crr_rate"));
}

#[test]
fn form_errors_stop_the_calculation() {
    let tmp = tempdir().unwrap();
    bsim(&tmp)
        .args([
            "commercial-banks",
            "--set",
            "serviceType=Locker Rent",
            "--set",
            "amount=100",
            "--set",
            "accountType=Savings",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Locker Rent' is not an option for 'serviceType'"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn out_of_range_values_only_warn() {
    let tmp = tempdir().unwrap();
    bsim(&tmp)
        .args(["rbi-functions", "--set", "deposits=1000", "--set", "crr_rate=25", "--set", "slr_rate=18"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: crr_rate: value 25 is greater than maximum 20"))
        .stdout(predicate::str::contains("Result: ₹570"));
}

#[test]
fn degenerate_input_is_an_error() {
    let tmp = tempdir().unwrap();
    bsim(&tmp)
        .args([
            "discounting",
            "--set",
            "faceValue=1000",
            "--set",
            "discountRate=12",
            "--set",
            "daysToMaturity=0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("degenerate value for 'daysToMaturity'"));
}

#[test]
fn module_without_simulator_gives_placeholder() {
    let tmp = tempdir().unwrap();
    bsim(&tmp)
        .args(["factoring", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"formula\": \"N/A\""))
        .stdout(predicate::str::contains("Calculation not available"));
}

#[test]
fn inputs_file_with_overrides() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("bill.yaml");
    fs::write(&file, "faceValue: 100000\ndiscountRate: 12\ndaysToMaturity: 30\nbankCharges: 0\n")
        .unwrap();

    let assert = bsim(&tmp)
        .args(["discounting", "--json", "--set", "daysToMaturity=90", "--inputs"])
        .arg(&file)
        .assert()
        .success();
    let printed: SimulatorResult = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let net = printed.result.as_amount().unwrap();
    assert!((net - 97_041.10).abs() < 0.01, "{net}");
}

#[test]
fn inputs_file_with_unknown_extension() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("bill.txt");
    fs::write(&file, "faceValue=1").unwrap();
    bsim(&tmp)
        .args(["discounting", "--inputs"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a .json, .yaml or .yml file"));
}

#[test]
fn malformed_assignment_is_a_usage_error() {
    let tmp = tempdir().unwrap();
    bsim(&tmp).args(["rbi-functions", "--set", "deposits"]).assert().code(2);
}
