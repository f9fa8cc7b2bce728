use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_explicit_config_missing() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.args(["doctor", "--config", missing.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL bsim doctor"))
        .stdout(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_fails_on_bad_default_config() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("banksim");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "version = 3\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL bsim doctor"))
        .stdout(predicate::str::contains("version 3 is unsupported"))
        .stdout(predicate::str::contains("looked for:"));
}

#[test]
fn doctor_fails_on_broken_curriculum() {
    let tmp = tempdir().unwrap();
    let course = tmp.path().join("course.toml");
    fs::write(&course, "[[units]\n").unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, format!("version = 1\ncurriculum = \"{}\"\n", course.display())).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL bsim doctor"))
        .stdout(predicate::str::contains("failed to parse curriculum"));
}
