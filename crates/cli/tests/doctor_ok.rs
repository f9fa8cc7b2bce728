use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(&cfg, "version = 1\n\n[engine]\ndelay_ms = 250\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   bsim doctor"))
        .stdout(predicate::str::contains("engine.delay_ms: 250"))
        .stdout(predicate::str::contains("calculators: 8/8"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    write_file(
        &tmp.path().join("banksim/config.toml"),
        "version = 1\n\n[logging]\nlevel = \"debug\"\n",
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   bsim doctor"))
        .stdout(predicate::str::contains("logging.level: debug"));
}

#[test]
fn doctor_without_any_config_uses_defaults() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config: <defaults>"))
        .stdout(predicate::str::contains("curriculum: <builtin>"))
        .stdout(predicate::str::contains("units: 5"));
}

#[test]
fn doctor_reports_uncovered_simulator() {
    let tmp = tempdir().unwrap();
    let course = tmp.path().join("course.toml");
    write_file(
        &course,
        r#"
[[units]]
id = "u5"
title = "Unit V: Specialized Financial Services"
description = "specialised services"

[[units.modules]]
id = "factoring"
title = "Factoring"
unit = "Unit V"
description = "receivables"

[units.modules.simulator]
type = "calculator"
title = "Factoring Cost"
description = "cost of factoring"

[[units.modules.simulator.inputs]]
name = "receivables"
label = "Receivables"
type = "number"
required = true
"#,
    );
    let cfg = tmp.path().join("config.toml");
    write_file(&cfg, &format!("version = 1\ncurriculum = \"{}\"\n", course.display()));

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.args(["--config", cfg.to_str().unwrap(), "doctor"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WARN simulator without calculator: factoring"))
        .stdout(predicate::str::contains("WARN calculator without module: leasing"))
        .stdout(predicate::str::contains("calculators: 0/8"));
}
