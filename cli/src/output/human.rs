//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::domain::SshAuthentication;
use crate::domain::config::{StratusConfig, VALID_CONFIG_KEYS};
use crate::infra::config::CONFIG_PATH_ENV;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render a resolved SSH credential and the matching `ssh` invocation.
    pub fn render_ssh_auth(&self, auth: &SshAuthentication) {
        println!();
        self.ctx.kv("Endpoint:        ", &auth.endpoint);
        self.ctx.kv("Host key:        ", &auth.host_key_fingerprint);
        self.ctx.kv("Username:        ", &auth.username);
        self.ctx.kv("Passcode:        ", &auth.passcode);
        println!();
        self.ctx.info(&format!(
            "Connect with: {}",
            ssh_command(auth).style(self.ctx.styles.bold)
        ));
        self.ctx
            .info("Enter the passcode when prompted; it can be used only once.");
    }

    /// Render a one-time passcode. Printed even when quiet; it is the
    /// command's only output.
    pub fn render_passcode(&self, passcode: &str) {
        println!("{passcode}");
    }

    /// Render the current stratus configuration.
    pub fn render_config(&self, config: &StratusConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        for key in VALID_CONFIG_KEYS {
            println!("  {:<24} {}", format!("{key}:"), config.display_value(key));
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<18} {}",
            format!("{CONFIG_PATH_ENV}:"),
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "NO_COLOR:",
            std::env::var("NO_COLOR").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!();
    }
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// The `ssh` invocation that opens a session with `auth`.
#[must_use]
pub fn ssh_command(auth: &SshAuthentication) -> String {
    let (host, port) = auth.host_and_port();
    format!("ssh -p {port} {}@{host}", auth.username)
}

/// Banner printed before a service instance is deleted.
#[must_use]
pub fn deleting_banner(instance: &str, org: &str, space: &str, user: &str) -> String {
    format!("Deleting service instance {instance} in org {org} / space {space} as {user}...")
}
