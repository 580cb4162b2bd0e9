//! Shared HTTP plumbing for the platform adapters.

use anyhow::{Context, Result};
use percent_encoding::percent_decode_str;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use stratus_common::ErrorsResponse;

use crate::domain::Warnings;

/// Response header in which the Cloud Controller returns warnings.
pub const WARNINGS_HEADER: &str = "x-cf-warnings";

/// Build an HTTP client for platform calls.
///
/// Redirects are followed unless `follow_redirects` is false; the
/// authorization server reports passcodes through an unfollowed redirect.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_client(skip_ssl_validation: bool, follow_redirects: bool) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(concat!("stratus/", env!("CARGO_PKG_VERSION")))
        .danger_accept_invalid_certs(skip_ssl_validation);
    if !follow_redirects {
        builder = builder.redirect(reqwest::redirect::Policy::none());
    }
    builder.build().context("cannot build HTTP client")
}

/// Decode the warnings header of a response.
///
/// The header holds a comma-separated list of form-encoded messages and may
/// appear more than once.
#[must_use]
pub fn decode_warnings(headers: &HeaderMap) -> Warnings {
    headers
        .get_all(WARNINGS_HEADER)
        .iter()
        .filter_map(|value| match value.to_str() {
            Ok(s) => Some(s),
            Err(_) => {
                tracing::warn!("ignoring non-ASCII warnings header");
                None
            }
        })
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(|w| {
            percent_decode_str(&w.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned()
        })
        .collect()
}

/// Turn a non-success response into an error carrying the platform's
/// error details.
pub async fn api_error(response: Response) -> anyhow::Error {
    let status = response.status();
    let body: ErrorsResponse = response.json().await.unwrap_or_default();
    anyhow::anyhow!("{}", error_message(status, &body))
}

/// Each error contributes its detail, or its title when the detail is empty.
fn error_message(status: StatusCode, body: &ErrorsResponse) -> String {
    let lines: Vec<&str> = body
        .errors
        .iter()
        .map(|e| if e.detail.is_empty() { e.title.as_str() } else { e.detail.as_str() })
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        format!("Request failed with status {status}")
    } else {
        lines.join("\n")
    }
}
