//! `stratus delete-service SERVICE_INSTANCE [-f] [-w]`: delete a service instance.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{
    DeleteReply, JobEventSource, JobProgressPresenter, ServiceInstanceDeleter,
};
use crate::application::services::job_monitor::monitor_job;
use crate::domain::{DeletionStatus, StratusConfig, Warnings};
use crate::infra::cloud_controller::CloudControllerClient;
use crate::output::Renderer;
use crate::output::human::deleting_banner;
use crate::output::reporter::{SilentJobPresenter, TerminalJobPresenter};

/// Arguments for the delete-service command.
#[derive(Args)]
pub struct DeleteServiceArgs {
    /// Name of the service instance
    pub service_instance: String,

    /// Force deletion without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Wait for the delete operation to complete
    #[arg(short, long)]
    pub wait: bool,
}

/// Run `stratus delete-service`.
///
/// # Errors
///
/// Returns an error if no space is targeted or the deletion cannot be started.
pub async fn run(app: &AppContext, args: &DeleteServiceArgs) -> Result<ExitCode> {
    let config = app.load_config()?;
    let cc = CloudControllerClient::from_config(&config)?;
    delete_service(app, &config, &cc, args).await
}

/// Delete a service instance through `deleter` and report progress until the
/// job stream closes.
///
/// With `--json` no banner or progress is shown; a single status object is
/// printed once the stream closes.
///
/// # Errors
///
/// Returns an error if no org/space is targeted, the prompt fails, or the
/// deleter rejects the request.
pub async fn delete_service(
    app: &AppContext,
    config: &StratusConfig,
    deleter: &impl ServiceInstanceDeleter,
    args: &DeleteServiceArgs,
) -> Result<ExitCode> {
    let name = args.service_instance.as_str();
    let space_guid = config.space_guid()?;
    let (org, space) = config.org_and_space()?;

    let proceed = args.force
        || app.non_interactive
        || app.confirm(&format!("Really delete the service instance {name}?"), false)?;

    match app.renderer() {
        Renderer::Human(_) => {
            if !proceed {
                app.output.text("Delete cancelled");
                return Ok(ExitCode::SUCCESS);
            }
            let user = config.username.as_deref().unwrap_or("(unknown user)");
            app.output.text(&deleting_banner(name, org, space, user));

            let (reply, warnings) = deleter
                .delete_service_instance(name, space_guid, args.wait)
                .await
                .into_parts();
            app.output.warnings(&warnings);

            let presenter = TerminalJobPresenter::new(&app.output, name);
            if follow(reply?, &presenter, args.wait).await == DeletionStatus::DidNotExist {
                app.output
                    .text(&format!("Service instance {name} did not exist."));
            }
            app.output.ok();
        }
        Renderer::Json(r) => {
            if !proceed {
                r.render_deletion(name, DeletionStatus::Cancelled, &Warnings::new())?;
                return Ok(ExitCode::SUCCESS);
            }
            let (reply, warnings) = deleter
                .delete_service_instance(name, space_guid, args.wait)
                .await
                .into_parts();
            let reply = match reply {
                Ok(reply) => reply,
                Err(e) => {
                    app.output.warnings_to_stderr(&warnings);
                    return Err(e);
                }
            };
            let status = follow(reply, &SilentJobPresenter, args.wait).await;
            r.render_deletion(name, status, &warnings)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Drain the job stream, if any, and say how the deletion ended.
async fn follow(
    reply: DeleteReply<impl JobEventSource>,
    presenter: &impl JobProgressPresenter,
    wait: bool,
) -> DeletionStatus {
    match reply {
        DeleteReply::DidNotExist => DeletionStatus::DidNotExist,
        DeleteReply::Started(mut events) => monitor_job(&mut events, presenter, wait).await.into(),
    }
}
