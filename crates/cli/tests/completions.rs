use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn zsh_completions_are_generated() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef bsim"))
        .stdout(predicate::str::contains("calc"));
}

#[test]
fn unknown_shell_is_rejected() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsim"));
    cmd.args(["completions", "tcsh"]).assert().code(2);
}
