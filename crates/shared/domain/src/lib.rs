//! Domain layer - Core login entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Credential validation lives here so every consumer (flow, form, backend
//! adapters) applies the same rules.

pub mod constants;
pub mod credentials;
pub mod error;
pub mod session;
pub mod user;

pub use constants::*;
pub use credentials::{validate, Credentials, Field, FieldErrors, ValidationResult};
pub use error::{DomainError, DomainResult};
pub use session::{AuthOutcome, AuthState, Session};
pub use user::{LoginResponse, User};
