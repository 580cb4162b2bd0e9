//! Command implementations

pub mod config;
pub mod delete_service;
pub mod ssh;
