//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. Each enum exposes a stable `code()` used by `--json`
//! error output.

use thiserror::Error;

// ── SSH resolution errors ─────────────────────────────────────────────────────

/// Reasons an SSH credential could not be resolved.
///
/// Variants wrapping a collaborator error display that error unchanged.
#[derive(Debug, Error)]
pub enum SshError {
    #[error(transparent)]
    PlatformInfoUnavailable(anyhow::Error),

    #[error("SSH endpoint not set")]
    EndpointNotConfigured,

    #[error("SSH host key fingerprint not set")]
    HostKeyNotConfigured,

    #[error(transparent)]
    PasscodeUnavailable(anyhow::Error),

    #[error(transparent)]
    ApplicationLookupFailed(anyhow::Error),

    #[error("Process {process_type} not found")]
    ProcessTypeNotFound { process_type: String },

    #[error("Application '{name}' is not in the STARTED state")]
    ApplicationNotStarted { name: String },

    #[error("Instance {index} of process {process_type} not found")]
    ProcessInstanceNotFound { process_type: String, index: u32 },

    #[error("Instance {index} of process {process_type} not running")]
    ProcessInstanceNotRunning { process_type: String, index: u32 },
}

impl SshError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PlatformInfoUnavailable(_) => "platform_info_unavailable",
            Self::EndpointNotConfigured => "ssh_endpoint_not_configured",
            Self::HostKeyNotConfigured => "ssh_host_key_not_configured",
            Self::PasscodeUnavailable(_) => "passcode_unavailable",
            Self::ApplicationLookupFailed(_) => "application_lookup_failed",
            Self::ProcessTypeNotFound { .. } => "process_type_not_found",
            Self::ApplicationNotStarted { .. } => "application_not_started",
            Self::ProcessInstanceNotFound { .. } => "process_instance_not_found",
            Self::ProcessInstanceNotRunning { .. } => "process_instance_not_running",
        }
    }
}

// ── Target errors ─────────────────────────────────────────────────────────────

/// The local configuration does not point at a usable platform target.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("No API endpoint set. Use 'stratus config set api_endpoint <url>' to set one.")]
    NoApiEndpoint,

    #[error("Not logged in. Use 'stratus config set access_token <token>' to log in.")]
    NotLoggedIn,

    #[error("No space targeted. Use 'stratus config set space_guid <guid>' to target a space.")]
    NoSpaceTargeted,

    #[error("No org targeted. Use 'stratus config set org <name>' to target an org.")]
    NoOrgTargeted,
}

impl TargetError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoApiEndpoint => "no_api_endpoint",
            Self::NotLoggedIn => "not_logged_in",
            Self::NoSpaceTargeted => "no_space_targeted",
            Self::NoOrgTargeted => "no_org_targeted",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nExpected: {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}

impl ConfigError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownKey { .. } => "unknown_config_key",
            Self::InvalidValue { .. } => "invalid_config_value",
        }
    }
}

/// Map any error produced by a command to its stable `--json` error code.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<SshError>() {
        e.code()
    } else if let Some(e) = err.downcast_ref::<TargetError>() {
        e.code()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.code()
    } else {
        "error"
    }
}
