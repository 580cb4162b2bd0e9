//! `stratus ssh` and `stratus ssh-code`: SSH credentials for app instances.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{ApplicationSummaryProvider, PasscodeProvider, RootInfoProvider};
use crate::application::services::ssh_auth::resolve_ssh_authentication;
use crate::domain::{ShellTarget, StratusConfig};
use crate::infra::cloud_controller::CloudControllerClient;
use crate::infra::uaa::UaaClient;
use crate::output::Renderer;

/// Arguments for the ssh command.
#[derive(Args)]
pub struct SshArgs {
    /// Name of the application
    pub app: String,

    /// Process type to connect to
    #[arg(long, default_value = "web")]
    pub process: String,

    /// Index of the process instance
    #[arg(short = 'i', long = "app-instance-index", default_value_t = 0)]
    pub index: u32,
}

/// Run `stratus ssh APP`.
///
/// # Errors
///
/// Returns an error if no target is configured or the credential cannot be
/// resolved. Warnings are shown in both cases.
pub async fn run(app: &AppContext, args: &SshArgs) -> Result<ExitCode> {
    let config = app.load_config()?;
    let cc = CloudControllerClient::from_config(&config)?;
    let uaa = UaaClient::from_config(&config, &cc)?;
    ssh(app, &config, &cc, &uaa, &cc, args).await
}

/// Resolve and render the SSH credential through the given ports.
///
/// # Errors
///
/// Returns an error if no session or space is configured, or if any
/// resolution step fails.
pub async fn ssh(
    app: &AppContext,
    config: &StratusConfig,
    root: &impl RootInfoProvider,
    passcodes: &impl PasscodeProvider,
    apps: &impl ApplicationSummaryProvider,
    args: &SshArgs,
) -> Result<ExitCode> {
    let session = config.session()?;
    let target = ShellTarget {
        app_name: &args.app,
        space_guid: config.space_guid()?,
        process_type: &args.process,
        index: args.index,
    };

    let (result, warnings) = resolve_ssh_authentication(root, passcodes, apps, session, target)
        .await
        .into_parts();

    match app.renderer() {
        Renderer::Human(r) => {
            app.output.warnings(&warnings);
            r.render_ssh_auth(&result?);
        }
        Renderer::Json(r) => match result {
            Ok(auth) => r.render_ssh_auth(&auth, &warnings)?,
            Err(e) => {
                app.output.warnings_to_stderr(&warnings);
                return Err(e.into());
            }
        },
    }
    Ok(ExitCode::SUCCESS)
}

/// Run `stratus ssh-code`.
///
/// # Errors
///
/// Returns an error if no session is configured or no passcode is issued.
pub async fn run_code(app: &AppContext) -> Result<ExitCode> {
    let config = app.load_config()?;
    let cc = CloudControllerClient::from_config(&config)?;
    let session = config.session()?;
    let uaa = UaaClient::from_config(&config, &cc)?;

    let passcode = uaa
        .get_passcode(session.access_token, session.oauth_client)
        .await?;

    match app.renderer() {
        Renderer::Human(r) => r.render_passcode(&passcode),
        Renderer::Json(r) => r.render_passcode(&passcode)?,
    }
    Ok(ExitCode::SUCCESS)
}
