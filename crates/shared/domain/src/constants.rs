//! Domain-level constants.
//!
//! These constants define validation rules and user-facing messages.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length accepted (in characters)
pub const MAX_PASSWORD_LENGTH: usize = 100;

/// Message shown when the email field is left empty
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";

/// Message shown when the email does not look like an address
pub const EMAIL_INVALID_MESSAGE: &str = "Must be a valid email";

// =============================================================================
// Authentication
// =============================================================================

/// Storage key under which the access token is persisted
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Message used when an authentication failure carries no readable text
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

/// Message returned for a rejected email/password pair
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Password length message for the lower bound
pub fn password_too_short_message() -> String {
    format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH)
}

/// Password length message for the upper bound
pub fn password_too_long_message() -> String {
    format!("Password must be at most {} characters", MAX_PASSWORD_LENGTH)
}
