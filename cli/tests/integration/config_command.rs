//! Integration tests for `stratus config` command.
//!
//! All filesystem-touching tests set `STRATUS_CONFIG` to a temp path so they
//! never read or write `~/.stratus/config.yaml`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stratus() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stratus"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Returns a `TempDir` and the path string for a config file inside it.
fn temp_config_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("config.yaml")
        .to_string_lossy()
        .into_owned();
    (dir, path)
}

// ---------------------------------------------------------------------------
// Subcommand registration
// ---------------------------------------------------------------------------

#[test]
fn test_config_help_shows_show_and_set_subcommands() {
    stratus()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"));
}

// ---------------------------------------------------------------------------
// `stratus config show`
// ---------------------------------------------------------------------------

#[test]
fn test_config_show_no_config_file_uses_defaults() {
    let (_dir, path) = temp_config_path();
    stratus()
        .args(["config", "show"])
        .env("STRATUS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ssh_oauth_client:"))
        .stdout(predicate::str::contains("ssh-proxy"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_config_show_json_lists_every_key() {
    let (_dir, path) = temp_config_path();
    let output = stratus()
        .args(["config", "show", "--json"])
        .env("STRATUS_CONFIG", &path)
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["path"], path.as_str());
    assert_eq!(value["values"]["ssh_oauth_client"], "ssh-proxy");
    assert_eq!(value["values"]["job_poll_interval_secs"], "1");
    assert_eq!(value["values"]["job_poll_timeout_secs"], "600");
}

#[test]
fn test_config_show_redacts_access_token() {
    let (_dir, path) = temp_config_path();
    std::fs::write(&path, "access_token: bearer secret-token\n").unwrap();

    stratus()
        .args(["config", "show"])
        .env("STRATUS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(redacted)"))
        .stdout(predicate::str::contains("secret-token").not());
}

// ---------------------------------------------------------------------------
// `stratus config set`
// ---------------------------------------------------------------------------

#[test]
fn test_config_set_writes_file_and_reports() {
    let (_dir, path) = temp_config_path();
    stratus()
        .args(["config", "set", "space_guid", "space-1"])
        .env("STRATUS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set space_guid = space-1"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("space_guid: space-1"), "{content}");
}

#[cfg(unix)]
#[test]
fn test_config_set_restricts_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, path) = temp_config_path();
    stratus()
        .args(["config", "set", "access_token", "bearer tok"])
        .env("STRATUS_CONFIG", &path)
        .assert()
        .success();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_config_set_then_show_round_trips_value() {
    let (_dir, path) = temp_config_path();
    stratus()
        .args(["config", "set", "api_endpoint", "https://api.example.com/"])
        .env("STRATUS_CONFIG", &path)
        .assert()
        .success();

    stratus()
        .args(["config", "show"])
        .env("STRATUS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.example.com"))
        .stdout(predicate::str::contains("https://api.example.com/").not());
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (_dir, path) = temp_config_path();
    stratus()
        .args(["config", "set", "region", "eu"])
        .env("STRATUS_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("region"));

    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_config_set_invalid_value_json_error_code() {
    let (_dir, path) = temp_config_path();
    let output = stratus()
        .args(["config", "set", "skip_ssl_validation", "maybe", "--json"])
        .env("STRATUS_CONFIG", &path)
        .output()
        .expect("run");
    assert!(!output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "invalid_config_value");
}
