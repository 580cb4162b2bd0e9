//! Tests for the `ssh_auth` application service.
//!
//! Each collaborator is a counting fake, so the tests check both the
//! outcome and which remote calls were made to reach it.

#![allow(clippy::expect_used)]

use stratus_cli::application::services::ssh_auth::resolve_ssh_authentication;
use stratus_cli::domain::{
    ApplicationState, InstanceState, SessionCredentials, ShellTarget, SshAuthentication, SshError,
};

use crate::mocks::{FakeApps, FakePasscodes, FakeRoot, process, running_web_app, summary};

const SESSION: SessionCredentials<'static> = SessionCredentials {
    access_token: "bearer tok",
    oauth_client: "ssh-proxy",
};

fn target(process_type: &'static str, index: u32) -> ShellTarget<'static> {
    ShellTarget {
        app_name: "my-app",
        space_guid: "space-1",
        process_type,
        index,
    }
}

fn warning_list(warnings: &stratus_cli::domain::Warnings) -> Vec<&str> {
    warnings.iter().map(String::as_str).collect()
}

// ── Success ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fully_satisfied_target_resolves_credentials() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &[]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &[]);

    let (result, warnings) =
        resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
            .await
            .into_parts();

    assert_eq!(
        result.expect("resolved"),
        SshAuthentication {
            endpoint: "ssh.example.com".to_string(),
            host_key_fingerprint: "AA:BB".to_string(),
            passcode: "pc123".to_string(),
            username: "cf:g-1/0".to_string(),
        }
    );
    assert!(warnings.is_empty());
}

#[tokio::test]
async fn test_collaborators_receive_session_and_target() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &[]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &[]);

    let _ = resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0)).await;

    assert_eq!(
        passcodes.last_request(),
        Some(("bearer tok".to_string(), "ssh-proxy".to_string()))
    );
    assert_eq!(
        apps.last_request(),
        Some(("my-app".to_string(), "space-1".to_string()))
    );
}

#[tokio::test]
async fn test_success_keeps_root_and_summary_warnings_in_order() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &["w-root"]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &["w-app-1", "w-app-2"]);

    let (result, warnings) =
        resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
            .await
            .into_parts();

    assert!(result.is_ok());
    assert_eq!(warning_list(&warnings), ["w-root", "w-app-1", "w-app-2"]);
}

#[tokio::test]
async fn test_resolving_twice_yields_identical_independent_results() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &["w-root"]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &["w-app"]);

    let (first, first_warnings) =
        resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
            .await
            .into_parts();
    let (second, second_warnings) =
        resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
            .await
            .into_parts();

    assert_eq!(first.expect("first"), second.expect("second"));
    assert_eq!(first_warnings, second_warnings);
    assert_eq!(first_warnings.len(), 2, "warnings must not accumulate across calls");
    assert_eq!(root.calls(), 2);
    assert_eq!(passcodes.calls(), 2);
    assert_eq!(apps.calls(), 2);
}

// ── Step 1: root info ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_root_info_failure_is_surfaced_unchanged() {
    let root = FakeRoot::failing("root unreachable", &["w-root"]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &[]);

    let (result, warnings) =
        resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
            .await
            .into_parts();

    let err = result.expect_err("root failure");
    assert!(matches!(err, SshError::PlatformInfoUnavailable(_)));
    assert_eq!(err.to_string(), "root unreachable");
    assert_eq!(warning_list(&warnings), ["w-root"]);
    assert_eq!(passcodes.calls(), 0);
    assert_eq!(apps.calls(), 0);
}

#[tokio::test]
async fn test_missing_endpoint_stops_before_any_further_call() {
    let root = FakeRoot::with("", "AA:BB", &["w-root"]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &[]);

    let (result, warnings) =
        resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
            .await
            .into_parts();

    let err = result.expect_err("no endpoint");
    assert!(matches!(err, SshError::EndpointNotConfigured));
    assert_eq!(err.to_string(), "SSH endpoint not set");
    assert_eq!(warning_list(&warnings), ["w-root"]);
    assert_eq!(root.calls(), 1);
    assert_eq!(passcodes.calls(), 0);
    assert_eq!(apps.calls(), 0);
}

#[tokio::test]
async fn test_missing_endpoint_wins_over_missing_fingerprint() {
    let root = FakeRoot::with("", "", &[]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &[]);

    let result = resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
        .await
        .result;

    assert!(matches!(result, Err(SshError::EndpointNotConfigured)));
}

#[tokio::test]
async fn test_missing_fingerprint_stops_before_passcode() {
    let root = FakeRoot::with("ssh.example.com", "", &[]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &[]);

    let result = resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
        .await
        .result;

    assert!(matches!(result, Err(SshError::HostKeyNotConfigured)));
    assert_eq!(passcodes.calls(), 0);
    assert_eq!(apps.calls(), 0);
}

// ── Step 2: passcode ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_passcode_failure_keeps_root_warnings_and_skips_summary() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &["w-root"]);
    let passcodes = FakePasscodes::failing("token expired");
    let apps = FakeApps::with(running_web_app(), &["w-app"]);

    let (result, warnings) =
        resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
            .await
            .into_parts();

    let err = result.expect_err("passcode failure");
    assert!(matches!(err, SshError::PasscodeUnavailable(_)));
    assert_eq!(err.to_string(), "token expired");
    assert_eq!(warning_list(&warnings), ["w-root"]);
    assert_eq!(apps.calls(), 0);
}

// ── Step 3: application summary ───────────────────────────────────────────────

#[tokio::test]
async fn test_summary_failure_keeps_warnings_from_both_calls() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &["w-root"]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::failing("App 'my-app' not found", &["w-app"]);

    let (result, warnings) =
        resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
            .await
            .into_parts();

    let err = result.expect_err("lookup failure");
    assert!(matches!(err, SshError::ApplicationLookupFailed(_)));
    assert_eq!(err.to_string(), "App 'my-app' not found");
    assert_eq!(warning_list(&warnings), ["w-root", "w-app"]);
}

// ── Step 4: selection ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_process_type_reports_exact_warnings() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &["w-root"]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &["w-app"]);

    let (result, warnings) =
        resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("worker", 0))
            .await
            .into_parts();

    let err = result.expect_err("no worker process");
    assert!(
        matches!(&err, SshError::ProcessTypeNotFound { process_type } if process_type == "worker")
    );
    assert_eq!(err.to_string(), "Process worker not found");
    assert_eq!(warning_list(&warnings), ["w-root", "w-app"]);
}

#[tokio::test]
async fn test_stopped_app_fails_even_with_running_instance() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &[]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(
        summary(
            ApplicationState::Stopped,
            vec![process("g-1", "web", &[(0, InstanceState::Running)])],
        ),
        &[],
    );

    let result = resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 0))
        .await
        .result;

    assert!(
        matches!(&result, Err(SshError::ApplicationNotStarted { name }) if name == "my-app"),
        "got {result:?}"
    );
}

#[tokio::test]
async fn test_missing_instance_index_is_reported() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &[]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(running_web_app(), &[]);

    let result = resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 3))
        .await
        .result;

    let err = result.expect_err("no instance 3");
    assert!(matches!(
        err,
        SshError::ProcessInstanceNotFound { index: 3, .. }
    ));
    assert_eq!(err.to_string(), "Instance 3 of process web not found");
}

#[tokio::test]
async fn test_crashed_instance_is_not_running() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &[]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(
        summary(
            ApplicationState::Started,
            vec![process(
                "g-1",
                "web",
                &[(0, InstanceState::Running), (1, InstanceState::Crashed)],
            )],
        ),
        &[],
    );

    let result = resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 1))
        .await
        .result;

    assert!(matches!(
        result,
        Err(SshError::ProcessInstanceNotRunning { index: 1, .. })
    ));
}

#[tokio::test]
async fn test_first_process_of_requested_type_is_used() {
    let root = FakeRoot::with("ssh.example.com", "AA:BB", &[]);
    let passcodes = FakePasscodes::issuing("pc123");
    let apps = FakeApps::with(
        summary(
            ApplicationState::Started,
            vec![
                process("w-1", "worker", &[(0, InstanceState::Running)]),
                process("g-1", "web", &[(0, InstanceState::Running), (2, InstanceState::Running)]),
                process("g-2", "web", &[(0, InstanceState::Running)]),
            ],
        ),
        &[],
    );

    let auth = resolve_ssh_authentication(&root, &passcodes, &apps, SESSION, target("web", 2))
        .await
        .result
        .expect("resolved");

    assert_eq!(auth.username, "cf:g-1/2");
}
