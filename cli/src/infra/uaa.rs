//! Authorization server adapter for one-time SSH passcodes.

use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, LOCATION};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::application::ports::PasscodeProvider;
use crate::domain::StratusConfig;
use crate::infra::cloud_controller::CloudControllerClient;
use crate::infra::http::build_client;

/// Where the authorization server lives.
enum Endpoint {
    Configured(String),
    /// Looked up from the API root on first use.
    Advertised(CloudControllerClient),
}

/// Client for the authorization endpoint that issues SSH passcodes.
pub struct UaaClient {
    http: Client,
    endpoint: Endpoint,
}

impl UaaClient {
    /// Client for a known authorization endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: &str, skip_ssl_validation: bool) -> Result<Self> {
        Ok(Self {
            http: build_client(skip_ssl_validation, false)?,
            endpoint: Endpoint::Configured(endpoint.trim_end_matches('/').to_string()),
        })
    }

    /// Client for the configured authorization endpoint, or for the one the
    /// API root advertises when none is configured.
    ///
    /// No request is made here. Discovery happens with the first passcode
    /// request and its failures are reported as passcode failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &StratusConfig, cc: &CloudControllerClient) -> Result<Self> {
        match config.uaa_endpoint.as_deref().filter(|e| !e.is_empty()) {
            Some(endpoint) => Self::new(endpoint, config.skip_ssl_validation),
            None => Ok(Self {
                http: build_client(config.skip_ssl_validation, false)?,
                endpoint: Endpoint::Advertised(cc.clone()),
            }),
        }
    }

    async fn endpoint(&self) -> Result<String> {
        match &self.endpoint {
            Endpoint::Configured(endpoint) => Ok(endpoint.clone()),
            Endpoint::Advertised(cc) => {
                let endpoint = cc.authorization_endpoint().await?;
                debug!(%endpoint, "discovered authorization endpoint");
                Ok(endpoint.trim_end_matches('/').to_string())
            }
        }
    }
}

impl PasscodeProvider for UaaClient {
    async fn get_passcode(&self, access_token: &str, oauth_client: &str) -> Result<String> {
        let endpoint = self.endpoint().await?;
        let url = format!("{endpoint}/oauth/authorize");
        debug!(%url, oauth_client, "requesting authorization code");
        let response = self
            .http
            .get(&url)
            .query(&[("response_type", "code"), ("client_id", oauth_client)])
            .header(AUTHORIZATION, access_token)
            .send()
            .await
            .with_context(|| format!("cannot reach {endpoint}"))?;

        if response.status() != StatusCode::FOUND {
            anyhow::bail!(
                "Error requesting one time code from server: {}",
                response.status()
            );
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .context("authorization server returned no redirect location")?;
        passcode_from_location(&endpoint, location)
    }
}

/// Extract the `code` query parameter from a redirect target, which may be
/// relative to `base`.
fn passcode_from_location(base: &str, location: &str) -> Result<String> {
    let base = Url::parse(base).with_context(|| format!("invalid endpoint {base}"))?;
    let target = base
        .join(location)
        .with_context(|| format!("invalid redirect location {location}"))?;
    target
        .query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
        .context("authorization server did not return a passcode")
}
