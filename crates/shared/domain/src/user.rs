//! User entity and the authentication collaborator's success payload.

use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier
    pub id: String,
    /// User email address
    pub email: String,
    /// User display name
    pub name: String,
}

/// Successful login response (user plus access token).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("user", &self.user)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
