//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::{
    AppSummary, JobOutcome, JobState, JobStatusEvent, StratusConfig, Warned,
};

// ── Value Types ───────────────────────────────────────────────────────────────

/// The slice of the platform root document needed for SSH.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootInfo {
    /// `host[:port]` of the SSH proxy; empty when SSH is not offered.
    pub ssh_endpoint: String,
    /// Fingerprint of the proxy's host key; empty when not advertised.
    pub ssh_host_key_fingerprint: String,
}

/// Result of asking the platform to delete a service instance.
#[derive(Debug)]
pub enum DeleteReply<E> {
    /// Deletion was accepted; progress arrives on the event source.
    Started(E),
    /// No service instance with that name exists in the space.
    DidNotExist,
}

// ── Platform Ports ────────────────────────────────────────────────────────────

/// Source of the platform root document.
#[allow(async_fn_in_trait)]
pub trait RootInfoProvider {
    /// Fetch root info along with any warnings the platform attached.
    async fn get_info(&self) -> Warned<RootInfo>;
}

/// Issues single-use SSH passcodes.
#[allow(async_fn_in_trait)]
pub trait PasscodeProvider {
    /// Exchange the caller's access token for a passcode.
    async fn get_passcode(&self, access_token: &str, oauth_client: &str) -> Result<String>;
}

/// Looks up an application together with its processes and instances.
#[allow(async_fn_in_trait)]
pub trait ApplicationSummaryProvider {
    /// Fetch the summary of the application named `app_name` in the space.
    async fn get_summary(&self, app_name: &str, space_guid: &str) -> Warned<AppSummary>;
}

/// Starts the asynchronous deletion of a service instance.
#[allow(async_fn_in_trait)]
pub trait ServiceInstanceDeleter {
    /// Stream of job progress handed back when deletion starts.
    type Events: JobEventSource;

    /// Request deletion. `wait` tells the producer whether to keep polling
    /// past the first POLLING state.
    async fn delete_service_instance(
        &self,
        name: &str,
        space_guid: &str,
        wait: bool,
    ) -> Warned<DeleteReply<Self::Events>>;
}

// ── Job Progress Ports ────────────────────────────────────────────────────────

/// Read side of a job-status stream. The producer alone decides when the
/// stream ends.
#[allow(async_fn_in_trait)]
pub trait JobEventSource {
    /// Wait for the next event; `None` once the producer has closed the stream.
    async fn next_event(&mut self) -> Option<JobStatusEvent>;
}

/// Sink for job progress output. Synchronous.
pub trait JobProgressPresenter {
    /// The job entered a state different from the previous event's.
    fn state_changed(&self, state: &JobState);
    /// The job is still in the same state as the previous event.
    fn still_in_state(&self);
    /// The stream has closed.
    fn finished(&self, outcome: JobOutcome);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts persistence of the client configuration.
pub trait ConfigStore {
    /// Load configuration, returning defaults if none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if stored configuration exists but cannot be read.
    fn load(&self) -> Result<StratusConfig>;
    /// Persist configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    fn save(&self, config: &StratusConfig) -> Result<()>;
    /// Location of the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
