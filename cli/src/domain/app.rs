//! Application summary and in-memory process/instance selection.
//!
//! Everything here operates on a summary that has already been fetched;
//! no lookup in this module performs I/O.

use crate::domain::error::SshError;

/// Desired state of an application as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationState {
    Started,
    Stopped,
}

impl ApplicationState {
    /// Parse the platform's state string. Anything other than `STARTED`
    /// counts as stopped.
    #[must_use]
    pub fn from_wire(state: &str) -> Self {
        if state.eq_ignore_ascii_case("STARTED") {
            Self::Started
        } else {
            Self::Stopped
        }
    }
}

/// Runtime state of one process instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceState {
    Running,
    Starting,
    Crashed,
    Down,
    Unknown(String),
}

impl InstanceState {
    #[must_use]
    pub fn from_wire(state: &str) -> Self {
        match state.to_ascii_uppercase().as_str() {
            "RUNNING" => Self::Running,
            "STARTING" => Self::Starting,
            "CRASHED" => Self::Crashed,
            "DOWN" => Self::Down,
            _ => Self::Unknown(state.to_string()),
        }
    }
}

/// Identity and aggregate state of an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub guid: String,
    pub name: String,
    pub state: ApplicationState,
}

impl Application {
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state == ApplicationState::Started
    }
}

/// One running or stopped replica of a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInstance {
    pub index: u32,
    pub state: InstanceState,
}

impl ProcessInstance {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == InstanceState::Running
    }
}

/// A process group of an application together with its instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub guid: String,
    pub process_type: String,
    pub instances: Vec<ProcessInstance>,
}

impl ProcessSummary {
    /// First instance whose index equals `index`.
    #[must_use]
    pub fn instance(&self, index: u32) -> Option<&ProcessInstance> {
        self.instances.iter().find(|i| i.index == index)
    }
}

/// Snapshot of an application and all of its processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSummary {
    pub application: Application,
    pub processes: Vec<ProcessSummary>,
}

impl AppSummary {
    /// First process whose type equals `process_type`.
    ///
    /// The platform allows at most one process per type; if that is ever
    /// violated the first one encountered wins.
    #[must_use]
    pub fn process(&self, process_type: &str) -> Option<&ProcessSummary> {
        self.processes.iter().find(|p| p.process_type == process_type)
    }
}

/// Pick the process instance a shell session should attach to.
///
/// Checks run in a fixed order and the first failure wins: process type,
/// application started, instance index, instance running. Returns the
/// owning process on success.
///
/// # Errors
///
/// Returns the [`SshError`] for the first unmet condition.
pub fn locate_process_instance<'a>(
    summary: &'a AppSummary,
    process_type: &str,
    index: u32,
) -> Result<&'a ProcessSummary, SshError> {
    let process = summary
        .process(process_type)
        .ok_or_else(|| SshError::ProcessTypeNotFound {
            process_type: process_type.to_string(),
        })?;

    if !summary.application.is_started() {
        return Err(SshError::ApplicationNotStarted {
            name: summary.application.name.clone(),
        });
    }

    let instance = process
        .instance(index)
        .ok_or_else(|| SshError::ProcessInstanceNotFound {
            process_type: process_type.to_string(),
            index,
        })?;

    if !instance.is_running() {
        return Err(SshError::ProcessInstanceNotRunning {
            process_type: process_type.to_string(),
            index,
        });
    }

    Ok(process)
}
