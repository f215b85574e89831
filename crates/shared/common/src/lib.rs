//! Common utilities shared across the login workspace.
//!
//! This crate provides:
//! - Unified error handling for collaborators, storage and the login flow
//! - Environment-driven configuration
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, NETWORK_FAILURE_MESSAGE, TIMEOUT_MESSAGE};
