//! Unified error handling for the login workspace.
//!
//! Provides a single error type shared by the auth collaborators, the token
//! storage backends and the login flow. Every variant knows the message that
//! is safe to surface to the user.

use domain::{DomainError, GENERIC_FAILURE_MESSAGE, INVALID_CREDENTIALS_MESSAGE};
use thiserror::Error;

/// Shown when the backend cannot be reached
pub const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Shown when the backend does not answer within the client timeout
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Authentication(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Transport
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Timeout(String),

    #[error("Parse error: {0}")]
    Parse(String),

    // Storage
    #[error("Storage error: {0}")]
    Storage(String),

    #[cfg(feature = "cache")]
    #[error("Cache error")]
    Cache(#[from] redis::RedisError),

    // Setup
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get a stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Authentication(_) => "AUTHENTICATION_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Http { .. } => "HTTP_ERROR",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            #[cfg(feature = "cache")]
            AppError::Cache(_) => "CACHE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for errors the user can act on
            AppError::Authentication(msg)
            | AppError::Validation(msg)
            | AppError::Network(msg)
            | AppError::Timeout(msg) => msg.clone(),
            AppError::Http { message, .. } => message.clone(),
            AppError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),

            // Hide details for internal errors
            AppError::Parse(msg) => {
                tracing::error!("Parse error: {}", msg);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            #[cfg(feature = "cache")]
            AppError::Cache(e) => {
                tracing::error!("Cache error: {:?}", e);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                GENERIC_FAILURE_MESSAGE.to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => AppError::Validation(errors.to_string()),
        }
    }
}

// =============================================================================
// HTTP Client Error Conversion (reqwest)
// =============================================================================

#[cfg(feature = "http")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            tracing::warn!("Request timed out: {}", err);
            AppError::Timeout(TIMEOUT_MESSAGE.to_string())
        } else if err.is_decode() {
            AppError::Parse(format!("Failed to decode response: {}", err))
        } else if err.is_builder() {
            AppError::Config(format!("Failed to build request: {}", err))
        } else {
            // The reqwest text carries the request URL; keep it in the logs only
            tracing::warn!("Request failed: {}", err);
            AppError::Network(NETWORK_FAILURE_MESSAGE.to_string())
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn authentication(msg: impl Into<String>) -> Self {
        AppError::Authentication(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
