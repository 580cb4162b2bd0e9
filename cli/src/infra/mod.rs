//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: HTTP calls to the Cloud
//! Controller and the authorization server, job polling, and configuration
//! file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod cloud_controller;
pub mod config;
pub mod http;
pub mod job_poller;
pub mod uaa;
