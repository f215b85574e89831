//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

use crate::credentials::FieldErrors;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more credential fields failed validation
    #[error("Validation error: {0}")]
    Validation(FieldErrors),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
