//! Domain types and validators for stratus configuration.
//!
//! Pure functions only. Nothing here touches the filesystem.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigError, TargetError};
use crate::domain::ssh::SessionCredentials;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_endpoint",
    "uaa_endpoint",
    "access_token",
    "ssh_oauth_client",
    "org",
    "space",
    "space_guid",
    "username",
    "skip_ssl_validation",
    "job_poll_interval_secs",
    "job_poll_timeout_secs",
];

pub const DEFAULT_SSH_OAUTH_CLIENT: &str = "ssh-proxy";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.stratus/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StratusConfig {
    /// Cloud Controller API, e.g. `https://api.example.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    /// Authorization server that issues SSH passcodes. Discovered from the
    /// API root when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uaa_endpoint: Option<String>,
    /// Access token including its `bearer` prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub ssh_oauth_client: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub skip_ssl_validation: bool,
    pub job_poll_interval_secs: u64,
    pub job_poll_timeout_secs: u64,
}

impl Default for StratusConfig {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            uaa_endpoint: None,
            access_token: None,
            ssh_oauth_client: DEFAULT_SSH_OAUTH_CLIENT.to_string(),
            org: None,
            space: None,
            space_guid: None,
            username: None,
            skip_ssl_validation: false,
            job_poll_interval_secs: 1,
            job_poll_timeout_secs: 600,
        }
    }
}

impl StratusConfig {
    /// The configured API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::NoApiEndpoint`] when unset.
    pub fn api_endpoint(&self) -> Result<&str, TargetError> {
        non_empty(self.api_endpoint.as_deref()).ok_or(TargetError::NoApiEndpoint)
    }

    /// The session used to request passcodes.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::NotLoggedIn`] when no access token is stored.
    pub fn session(&self) -> Result<SessionCredentials<'_>, TargetError> {
        let access_token =
            non_empty(self.access_token.as_deref()).ok_or(TargetError::NotLoggedIn)?;
        Ok(SessionCredentials {
            access_token,
            oauth_client: &self.ssh_oauth_client,
        })
    }

    /// GUID of the targeted space.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::NoSpaceTargeted`] when unset.
    pub fn space_guid(&self) -> Result<&str, TargetError> {
        non_empty(self.space_guid.as_deref()).ok_or(TargetError::NoSpaceTargeted)
    }

    /// Names of the targeted org and space, for display.
    ///
    /// # Errors
    ///
    /// Returns an error when either is unset.
    pub fn org_and_space(&self) -> Result<(&str, &str), TargetError> {
        let org = non_empty(self.org.as_deref()).ok_or(TargetError::NoOrgTargeted)?;
        let space = non_empty(self.space.as_deref()).ok_or(TargetError::NoSpaceTargeted)?;
        Ok((org, space))
    }

    /// Current value of `key` rendered for display. The access token is
    /// redacted.
    #[must_use]
    pub fn display_value(&self, key: &str) -> String {
        fn or_unset(value: Option<&String>) -> String {
            value.map_or_else(|| "(not set)".to_string(), Clone::clone)
        }
        match key {
            "api_endpoint" => or_unset(self.api_endpoint.as_ref()),
            "uaa_endpoint" => or_unset(self.uaa_endpoint.as_ref()),
            "access_token" => match self.access_token {
                Some(_) => "(redacted)".to_string(),
                None => "(not set)".to_string(),
            },
            "ssh_oauth_client" => self.ssh_oauth_client.clone(),
            "org" => or_unset(self.org.as_ref()),
            "space" => or_unset(self.space.as_ref()),
            "space_guid" => or_unset(self.space_guid.as_ref()),
            "username" => or_unset(self.username.as_ref()),
            "skip_ssl_validation" => self.skip_ssl_validation.to_string(),
            "job_poll_interval_secs" => self.job_poll_interval_secs.to_string(),
            "job_poll_timeout_secs" => self.job_poll_timeout_secs.to_string(),
            _ => String::new(),
        }
    }

    /// Apply a validated `key = value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        let owned = Some(value.to_string());
        match key {
            "api_endpoint" => self.api_endpoint = owned.map(|v| v.trim_end_matches('/').to_string()),
            "uaa_endpoint" => self.uaa_endpoint = owned.map(|v| v.trim_end_matches('/').to_string()),
            "access_token" => self.access_token = owned,
            "ssh_oauth_client" => value.clone_into(&mut self.ssh_oauth_client),
            "org" => self.org = owned,
            "space" => self.space = owned,
            "space_guid" => self.space_guid = owned,
            "username" => self.username = owned,
            "skip_ssl_validation" => self.skip_ssl_validation = value == "true",
            "job_poll_interval_secs" => self.job_poll_interval_secs = value.parse()?,
            "job_poll_timeout_secs" => self.job_poll_timeout_secs = value.parse()?,
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let expected = match key {
        "api_endpoint" | "uaa_endpoint"
            if !(value.starts_with("https://") || value.starts_with("http://")) =>
        {
            Some("a URL starting with http:// or https://")
        }
        "skip_ssl_validation" if value != "true" && value != "false" => Some("true or false"),
        "job_poll_interval_secs" | "job_poll_timeout_secs"
            if !value.parse::<u64>().is_ok_and(|v| v > 0) =>
        {
            Some("a positive number of seconds")
        }
        "ssh_oauth_client" | "space_guid" | "access_token" if value.trim().is_empty() => {
            Some("a non-empty value")
        }
        _ => None,
    };

    if let Some(expected) = expected {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
        .into());
    }
    Ok(())
}
