//! Cloud Controller v3 adapter.
//!
//! Implements the root-info, application-summary, and service-deletion
//! ports over HTTP. Each request's warnings header is collected in call
//! order; nothing here retries.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, LOCATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use stratus_common::{
    AppResource, JobResource, ListResponse, ProcessResource, ProcessStatsResource, RootLinks,
    RootResponse, ServiceInstanceResource,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::application::ports::{
    ApplicationSummaryProvider, DeleteReply, RootInfo, RootInfoProvider, ServiceInstanceDeleter,
};
use crate::domain::{
    AppSummary, Application, ApplicationState, InstanceState, JobStatusEvent, ProcessInstance,
    ProcessSummary, StratusConfig, Warned, Warnings,
};
use crate::infra::http::{api_error, build_client, decode_warnings};
use crate::infra::job_poller::{self, JobFetcher, PollSettings};

/// HTTP client for one Cloud Controller, authenticated as the current user.
#[derive(Clone)]
pub struct CloudControllerClient {
    http: Client,
    api: String,
    access_token: String,
    polling: PollSettings,
}

impl CloudControllerClient {
    /// Create a client for `api` that sends `access_token` on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api: &str, access_token: &str, skip_ssl_validation: bool) -> Result<Self> {
        Ok(Self {
            http: build_client(skip_ssl_validation, true)?,
            api: api.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
            polling: PollSettings::default(),
        })
    }

    /// Create a client from the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no API endpoint or access token is configured.
    pub fn from_config(config: &StratusConfig) -> Result<Self> {
        let api = config.api_endpoint()?;
        let session = config.session()?;
        Ok(Self::new(api, session.access_token, config.skip_ssl_validation)?
            .with_polling(PollSettings {
                interval: Duration::from_secs(config.job_poll_interval_secs),
                timeout: Duration::from_secs(config.job_poll_timeout_secs),
            }))
    }

    /// Override how deletion jobs are polled.
    #[must_use]
    pub fn with_polling(mut self, polling: PollSettings) -> Self {
        self.polling = polling;
        self
    }

    /// Endpoint of the authorization server advertised by the API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be fetched or advertises no
    /// authorization server.
    pub async fn authorization_endpoint(&self) -> Result<String> {
        let mut warnings = Warnings::new();
        let root: RootResponse = self.send_json(self.http.get(self.url("/")), &mut warnings).await?;
        for warning in &warnings {
            debug!(warning = %warning, "api root warning during authorization discovery");
        }
        authorization_endpoint_from(&root.links)
            .context("the API root does not advertise an authorization endpoint")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, &self.access_token)
    }

    /// Send `request`, record its warnings, and decode a JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        warnings: &mut Warnings,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .with_context(|| format!("cannot reach {}", self.api))?;
        debug!(url = %response.url(), status = %response.status(), "cloud controller response");
        warnings.append(decode_warnings(response.headers()));
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        response
            .json()
            .await
            .context("cannot decode Cloud Controller response")
    }

    async fn fetch_summary(
        &self,
        app_name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<AppSummary> {
        let apps: ListResponse<AppResource> = self
            .send_json(
                self.authorized(self.http.get(self.url("/v3/apps")))
                    .query(&[("names", app_name), ("space_guids", space_guid)]),
                warnings,
            )
            .await?;
        let app = apps
            .resources
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("App '{app_name}' not found"))?;

        let processes: ListResponse<ProcessResource> = self
            .send_json(
                self.authorized(
                    self.http
                        .get(self.url(&format!("/v3/apps/{}/processes", app.guid))),
                ),
                warnings,
            )
            .await?;

        let mut summaries = Vec::with_capacity(processes.resources.len());
        for process in processes.resources {
            let stats: ListResponse<ProcessStatsResource> = self
                .send_json(
                    self.authorized(
                        self.http
                            .get(self.url(&format!("/v3/processes/{}/stats", process.guid))),
                    ),
                    warnings,
                )
                .await?;
            summaries.push(process_summary(process, stats.resources));
        }

        Ok(AppSummary {
            application: Application {
                state: ApplicationState::from_wire(&app.state),
                guid: app.guid,
                name: app.name,
            },
            processes: summaries,
        })
    }

    async fn start_delete(
        &self,
        name: &str,
        space_guid: &str,
        wait: bool,
        warnings: &mut Warnings,
    ) -> Result<DeleteReply<mpsc::Receiver<JobStatusEvent>>> {
        let instances: ListResponse<ServiceInstanceResource> = self
            .send_json(
                self.authorized(self.http.get(self.url("/v3/service_instances")))
                    .query(&[("names", name), ("space_guids", space_guid)]),
                warnings,
            )
            .await?;
        let Some(instance) = instances.resources.into_iter().next() else {
            return Ok(DeleteReply::DidNotExist);
        };

        let response = self
            .authorized(
                self.http
                    .delete(self.url(&format!("/v3/service_instances/{}", instance.guid))),
            )
            .send()
            .await
            .with_context(|| format!("cannot reach {}", self.api))?;
        warnings.append(decode_warnings(response.headers()));

        match response.status() {
            StatusCode::NO_CONTENT => {
                debug!(guid = %instance.guid, "service instance deleted synchronously");
                Ok(DeleteReply::Started(job_poller::completed_stream()))
            }
            StatusCode::ACCEPTED => {
                let job_url = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .context("delete accepted without a job location")?
                    .to_string();
                debug!(guid = %instance.guid, %job_url, wait, "polling delete job");
                Ok(DeleteReply::Started(job_poller::spawn_job_poller(
                    self.clone(),
                    job_url,
                    wait,
                    self.polling,
                )))
            }
            _ => Err(api_error(response).await),
        }
    }
}

impl JobFetcher for CloudControllerClient {
    /// Job warnings surface in the log at warn level.
    async fn fetch_job(&self, job_url: &str) -> Result<JobResource> {
        let mut warnings = Warnings::new();
        let job: JobResource = self
            .send_json(self.authorized(self.http.get(job_url)), &mut warnings)
            .await?;
        for warning in job_warnings(&job, &warnings) {
            warn!(job = %job.guid, %warning, "job warning");
        }
        Ok(job)
    }
}

impl RootInfoProvider for CloudControllerClient {
    async fn get_info(&self) -> Warned<RootInfo> {
        let mut warnings = Warnings::new();
        let result = self
            .send_json::<RootResponse>(self.http.get(self.url("/")), &mut warnings)
            .await
            .map(|root| root_info_from(&root.links));
        Warned { result, warnings }
    }
}

impl ApplicationSummaryProvider for CloudControllerClient {
    async fn get_summary(&self, app_name: &str, space_guid: &str) -> Warned<AppSummary> {
        let mut warnings = Warnings::new();
        let result = self.fetch_summary(app_name, space_guid, &mut warnings).await;
        Warned { result, warnings }
    }
}

impl ServiceInstanceDeleter for CloudControllerClient {
    type Events = mpsc::Receiver<JobStatusEvent>;

    async fn delete_service_instance(
        &self,
        name: &str,
        space_guid: &str,
        wait: bool,
    ) -> Warned<DeleteReply<Self::Events>> {
        let mut warnings = Warnings::new();
        let result = self.start_delete(name, space_guid, wait, &mut warnings).await;
        Warned { result, warnings }
    }
}

// ── Mapping ───────────────────────────────────────────────────────────────────

fn root_info_from(links: &RootLinks) -> RootInfo {
    links
        .app_ssh
        .as_ref()
        .map(|ssh| RootInfo {
            ssh_endpoint: ssh.href.clone(),
            ssh_host_key_fingerprint: ssh.meta.host_key_fingerprint.clone(),
        })
        .unwrap_or_default()
}

/// The login server issues passcodes; older platforms only advertise UAA.
fn authorization_endpoint_from(links: &RootLinks) -> Option<String> {
    links
        .login
        .iter()
        .chain(links.uaa.iter())
        .map(|link| link.href.trim_end_matches('/'))
        .find(|href| !href.is_empty())
        .map(str::to_string)
}

/// Warnings attached to the job body, then those from the response header.
fn job_warnings(job: &JobResource, header: &Warnings) -> Vec<String> {
    job.warnings
        .iter()
        .map(|w| w.detail.clone())
        .filter(|w| !w.is_empty())
        .chain(header.iter().cloned())
        .collect()
}

fn process_summary(process: ProcessResource, stats: Vec<ProcessStatsResource>) -> ProcessSummary {
    ProcessSummary {
        guid: process.guid,
        process_type: process.process_type,
        instances: stats
            .into_iter()
            .map(|s| ProcessInstance {
                index: s.index,
                state: InstanceState::from_wire(&s.state),
            })
            .collect(),
    }
}
