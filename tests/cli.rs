use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

// Only paths that fail or return before the environment is checked, so
// nothing here touches the real user unit directory.

#[test]
fn help_explains_directory_creation() {
    let mut cmd = Command::new(cargo::cargo_bin!("userunit"));
    cmd.arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("userunit deploy <name> [options.toml]"))
        .stdout(predicate::str::contains("~/.config/systemd/user"));
}

#[test]
fn undeploy_takes_no_options_file() {
    let mut cmd = Command::new(cargo::cargo_bin!("userunit"));
    cmd.arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("userunit undeploy <name> ").and(
            predicate::str::contains("userunit undeploy <name> [options.toml]").not(),
        ));
}

#[test]
fn missing_name_is_an_error() {
    for command in ["deploy", "undeploy", "path"] {
        let mut cmd = Command::new(cargo::cargo_bin!("userunit"));
        cmd.arg(command)
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing unit name"));
    }
}

#[test]
fn unknown_command_exits_non_zero() {
    let mut cmd = Command::new(cargo::cargo_bin!("userunit"));
    cmd.arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command: frobnicate"));
}
