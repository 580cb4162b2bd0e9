//! Integration tests for the CLI surface: help, version, and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn stratus() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stratus"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    stratus().assert().code(2).stderr(predicate::str::contains(
        "Shell access and service lifecycle",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    stratus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("ssh"))
        .stdout(predicate::str::contains("ssh-code"))
        .stdout(predicate::str::contains("delete-service"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    stratus()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stratus"));
}

#[test]
fn test_cli_unknown_command_fails() {
    stratus()
        .arg("push")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// --- ssh ---

#[test]
fn test_ssh_help_shows_process_and_index_options() {
    stratus()
        .args(["ssh", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--process"))
        .stdout(predicate::str::contains("--app-instance-index"));
}

#[test]
fn test_ssh_requires_app_name() {
    stratus()
        .arg("ssh")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<APP>"));
}

#[test]
fn test_ssh_rejects_negative_index() {
    stratus()
        .args(["ssh", "my-app", "-i", "-1"])
        .assert()
        .code(2);
}

// --- delete-service ---

#[test]
fn test_delete_service_help_shows_force_and_wait() {
    stratus()
        .args(["delete-service", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"))
        .stdout(predicate::str::contains("--wait"));
}

#[test]
fn test_delete_service_requires_instance_name() {
    stratus()
        .arg("delete-service")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<SERVICE_INSTANCE>"));
}
