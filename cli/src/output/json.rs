//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, and the JSON renderings of command results.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::config::{StratusConfig, VALID_CONFIG_KEYS};
use crate::domain::{DeletionStatus, SshAuthentication, Warnings};

/// Renders command results as pretty-printed JSON on stdout.
pub struct JsonRenderer;

#[derive(Serialize)]
struct SshAuthOutput<'a> {
    #[serde(flatten)]
    auth: &'a SshAuthentication,
    warnings: &'a Warnings,
}

#[derive(Serialize)]
struct DeletionOutput<'a> {
    service_instance: &'a str,
    status: DeletionStatus,
    warnings: &'a Warnings,
}

impl JsonRenderer {
    /// Render a resolved SSH credential together with the warnings gathered.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_ssh_auth(&self, auth: &SshAuthentication, warnings: &Warnings) -> Result<()> {
        print_pretty(&SshAuthOutput { auth, warnings })
    }

    /// Render a one-time passcode.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_passcode(&self, passcode: &str) -> Result<()> {
        print_pretty(&serde_json::json!({ "passcode": passcode }))
    }

    /// Render the final status of a service instance deletion.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_deletion(
        &self,
        service_instance: &str,
        status: DeletionStatus,
        warnings: &Warnings,
    ) -> Result<()> {
        print_pretty(&DeletionOutput {
            service_instance,
            status,
            warnings,
        })
    }

    /// Render the configuration as a flat object. The access token is redacted.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &StratusConfig, path: &std::path::Path) -> Result<()> {
        let values: serde_json::Map<String, serde_json::Value> = VALID_CONFIG_KEYS
            .iter()
            .map(|key| ((*key).to_string(), config.display_value(key).into()))
            .collect();
        print_pretty(&serde_json::json!({
            "path": path.display().to_string(),
            "values": values,
        }))
    }
}

fn print_pretty(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
