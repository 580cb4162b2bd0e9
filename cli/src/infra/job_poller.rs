//! Producer side of the job-status stream.
//!
//! A spawned task polls the job and feeds a bounded channel. The task ends,
//! and with it the stream, when the job reaches a terminal state, when the
//! caller did not ask to wait and the job is POLLING, on timeout, on a fetch
//! error, or when the receiver is dropped.

use std::time::Duration;

use anyhow::Result;
use stratus_common::JobResource;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::application::ports::JobEventSource;
use crate::domain::{JobState, JobStatusEvent};
use crate::infra::cloud_controller::CloudControllerClient;

const EVENT_BUFFER: usize = 16;

/// How often and for how long a job is polled.
#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            timeout: Duration::from_secs(600),
        }
    }
}

/// Reads the current state of a job.
pub(crate) trait JobFetcher {
    async fn fetch_job(&self, job_url: &str) -> Result<JobResource>;
}

impl JobEventSource for mpsc::Receiver<JobStatusEvent> {
    async fn next_event(&mut self) -> Option<JobStatusEvent> {
        self.recv().await
    }
}

/// Start polling `job_url` and return the read side of the stream.
#[must_use]
pub fn spawn_job_poller(
    client: CloudControllerClient,
    job_url: String,
    wait: bool,
    settings: PollSettings,
) -> mpsc::Receiver<JobStatusEvent> {
    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    tokio::spawn(async move {
        poll_job(&client, &job_url, wait, settings, &tx).await;
        debug!(%job_url, "job stream closed");
    });
    rx
}

/// A stream holding a single COMPLETE event, for operations the platform
/// finished synchronously.
#[must_use]
pub fn completed_stream() -> mpsc::Receiver<JobStatusEvent> {
    let (tx, rx) = mpsc::channel(1);
    // Capacity 1 and a fresh receiver: this send cannot fail.
    let _ = tx.try_send(JobStatusEvent::new(JobState::Complete));
    rx
}

/// A timeout too large to represent as an instant means no deadline.
async fn poll_job(
    fetcher: &impl JobFetcher,
    job_url: &str,
    wait: bool,
    settings: PollSettings,
    tx: &mpsc::Sender<JobStatusEvent>,
) {
    let deadline = Instant::now().checked_add(settings.timeout);
    loop {
        let job = match fetcher.fetch_job(job_url).await {
            Ok(job) => job,
            Err(e) => {
                warn!(%job_url, error = %e, "polling job failed");
                return;
            }
        };

        let state = JobState::from_wire(&job.state);
        if state == JobState::Failed {
            for error in &job.errors {
                warn!(job = %job.guid, detail = %error.detail, "job failed");
            }
        }

        if tx.send(JobStatusEvent::new(state.clone())).await.is_err() {
            return;
        }
        if should_stop(&state, wait) {
            return;
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            warn!(%job_url, "job polling timed out");
            return;
        }
        tokio::time::sleep(settings.interval).await;
    }
}

fn should_stop(state: &JobState, wait: bool) -> bool {
    state.is_terminal() || (*state == JobState::Polling && !wait)
}
