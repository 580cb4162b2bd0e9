//! Asynchronous job states and events.

use std::fmt;

use serde::Serialize;

/// State of a platform job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    Processing,
    Polling,
    Complete,
    Failed,
    /// A state this client does not know; kept verbatim for display.
    Other(String),
}

impl JobState {
    #[must_use]
    pub fn from_wire(state: &str) -> Self {
        match state.to_ascii_uppercase().as_str() {
            "PROCESSING" => Self::Processing,
            "POLLING" => Self::Polling,
            "COMPLETE" => Self::Complete,
            "FAILED" => Self::Failed,
            _ => Self::Other(state.to_string()),
        }
    }

    /// No further progress is expected once a job is in a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processing => f.write_str("PROCESSING"),
            Self::Polling => f.write_str("POLLING"),
            Self::Complete => f.write_str("COMPLETE"),
            Self::Failed => f.write_str("FAILED"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// One observation of a job's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatusEvent {
    pub state: JobState,
}

impl JobStatusEvent {
    #[must_use]
    pub fn new(state: JobState) -> Self {
        Self { state }
    }
}

/// What the monitor concluded once the event stream closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// A COMPLETE event was observed.
    Completed,
    /// The stream closed without a COMPLETE event.
    InProgress,
}

/// Final status of a delete-service run, as reported in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionStatus {
    Deleted,
    InProgress,
    DidNotExist,
    /// The user declined the confirmation prompt.
    Cancelled,
}

impl From<JobOutcome> for DeletionStatus {
    fn from(outcome: JobOutcome) -> Self {
        match outcome {
            JobOutcome::Completed => Self::Deleted,
            JobOutcome::InProgress => Self::InProgress,
        }
    }
}
