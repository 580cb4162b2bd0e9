//! Application service: SSH credential resolution use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use tracing::debug;

use crate::application::ports::{ApplicationSummaryProvider, PasscodeProvider, RootInfoProvider};
use crate::domain::ssh::proxy_username;
use crate::domain::{
    SessionCredentials, ShellTarget, SshAuthentication, SshError, Warned, Warnings,
    locate_process_instance,
};

/// Resolve the credential for an SSH session into one process instance.
///
/// Steps run strictly in order and stop at the first failure: root info,
/// passcode, application summary, then in-memory instance selection.
/// Warnings from every remote call that ran are returned on both paths.
/// The passcode step contributes no warnings.
pub async fn resolve_ssh_authentication(
    root: &impl RootInfoProvider,
    passcodes: &impl PasscodeProvider,
    apps: &impl ApplicationSummaryProvider,
    session: SessionCredentials<'_>,
    target: ShellTarget<'_>,
) -> Warned<SshAuthentication, SshError> {
    let mut warnings = Warnings::new();
    let result = run_steps(root, passcodes, apps, session, target, &mut warnings).await;
    Warned { result, warnings }
}

async fn run_steps(
    root: &impl RootInfoProvider,
    passcodes: &impl PasscodeProvider,
    apps: &impl ApplicationSummaryProvider,
    session: SessionCredentials<'_>,
    target: ShellTarget<'_>,
    warnings: &mut Warnings,
) -> Result<SshAuthentication, SshError> {
    debug!("fetching platform root info");
    let (info, info_warnings) = root.get_info().await.into_parts();
    warnings.append(info_warnings);
    let info = info.map_err(SshError::PlatformInfoUnavailable)?;

    if info.ssh_endpoint.is_empty() {
        return Err(SshError::EndpointNotConfigured);
    }
    if info.ssh_host_key_fingerprint.is_empty() {
        return Err(SshError::HostKeyNotConfigured);
    }

    debug!(oauth_client = session.oauth_client, "requesting ssh passcode");
    let passcode = passcodes
        .get_passcode(session.access_token, session.oauth_client)
        .await
        .map_err(SshError::PasscodeUnavailable)?;

    debug!(app = target.app_name, space_guid = target.space_guid, "fetching application summary");
    let (summary, summary_warnings) = apps
        .get_summary(target.app_name, target.space_guid)
        .await
        .into_parts();
    warnings.append(summary_warnings);
    let summary = summary.map_err(SshError::ApplicationLookupFailed)?;

    let process = locate_process_instance(&summary, target.process_type, target.index)?;
    debug!(process_guid = %process.guid, index = target.index, "located process instance");

    Ok(SshAuthentication {
        endpoint: info.ssh_endpoint,
        host_key_fingerprint: info.ssh_host_key_fingerprint,
        passcode,
        username: proxy_username(&process.guid, target.index),
    })
}
