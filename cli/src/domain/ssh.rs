//! SSH credential types.

use serde::Serialize;

/// Port of the platform SSH proxy when the endpoint does not name one.
pub const DEFAULT_SSH_PORT: u16 = 2222;

/// Which process instance a shell session should land in.
#[derive(Debug, Clone, Copy)]
pub struct ShellTarget<'a> {
    /// Application name, unique within the space.
    pub app_name: &'a str,
    /// GUID of the space that contains the application.
    pub space_guid: &'a str,
    /// Process type, e.g. `"web"`.
    pub process_type: &'a str,
    /// Instance index within the process.
    pub index: u32,
}

/// The caller's session as needed to request a passcode.
#[derive(Debug, Clone, Copy)]
pub struct SessionCredentials<'a> {
    /// Current access token, including its `bearer` prefix.
    pub access_token: &'a str,
    /// OAuth client configured for the SSH proxy.
    pub oauth_client: &'a str,
}

/// Everything needed to open one SSH session. The passcode is single-use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SshAuthentication {
    pub endpoint: String,
    pub host_key_fingerprint: String,
    pub passcode: String,
    pub username: String,
}

impl SshAuthentication {
    /// Split the endpoint into host and port, defaulting the port.
    #[must_use]
    pub fn host_and_port(&self) -> (&str, u16) {
        match self.endpoint.rsplit_once(':') {
            Some((host, port)) => match port.parse() {
                Ok(port) => (host, port),
                Err(_) => (self.endpoint.as_str(), DEFAULT_SSH_PORT),
            },
            None => (self.endpoint.as_str(), DEFAULT_SSH_PORT),
        }
    }
}

/// Username the SSH proxy expects for a given process instance.
#[must_use]
pub fn proxy_username(process_guid: &str, index: u32) -> String {
    format!("cf:{process_guid}/{index}")
}
