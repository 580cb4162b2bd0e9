//! Domain layer: pure types, selection logic, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `reqwest`, or `std::fs`.
//! All functions are synchronous and take data in, returning data out.

pub mod app;
pub mod config;
pub mod error;
pub mod job;
pub mod ssh;
pub mod warnings;

pub use app::{
    AppSummary, Application, ApplicationState, InstanceState, ProcessInstance, ProcessSummary,
    locate_process_instance,
};
pub use config::{StratusConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, SshError, TargetError};
pub use job::{DeletionStatus, JobOutcome, JobState, JobStatusEvent};
pub use ssh::{SessionCredentials, ShellTarget, SshAuthentication};
pub use warnings::{Warned, Warnings};
