//! Session value object and authentication outcomes.

use serde::Serialize;

use crate::user::{LoginResponse, User};

/// Authenticated user plus opaque access token.
///
/// Only obtainable from a successful [`LoginResponse`]; immutable once built.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    user: User,
    #[serde(skip_serializing)]
    token: String,
}

impl Session {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            user: response.user,
            token: response.token,
        }
    }
}

// Don't expose the token in debug output (security)
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Result of a single authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success(Session),
    Failure(String),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthOutcome::Success(session) => Some(session),
            AuthOutcome::Failure(_) => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            AuthOutcome::Success(_) => None,
            AuthOutcome::Failure(message) => Some(message),
        }
    }
}

/// Snapshot of the client-side authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthState {
    pub user: Option<User>,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> LoginResponse {
        LoginResponse {
            user: User {
                id: "1".to_string(),
                email: "user@example.com".to_string(),
                name: "John Doe".to_string(),
            },
            token: "mock-jwt-token".to_string(),
        }
    }

    #[test]
    fn test_session_from_login_response() {
        let session = Session::from(response());
        assert_eq!(session.token(), "mock-jwt-token");
        assert_eq!(session.user().name, "John Doe");
    }

    #[test]
    fn test_session_debug_and_json_hide_token() {
        let session = Session::from(response());
        assert!(!format!("{:?}", session).contains("mock-jwt-token"));

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("user@example.com"));
        assert!(!json.contains("mock-jwt-token"));
    }

    #[test]
    fn test_auth_outcome_accessors() {
        let ok = AuthOutcome::Success(Session::from(response()));
        assert!(ok.is_success());
        assert!(ok.session().is_some());
        assert_eq!(ok.failure_message(), None);

        let failed = AuthOutcome::Failure("Invalid credentials".to_string());
        assert!(!failed.is_success());
        assert_eq!(failed.failure_message(), Some("Invalid credentials"));
    }

    #[test]
    fn test_login_response_deserializes() {
        let json = r#"{"user":{"id":"42","email":"a@b.io","name":"Ada"},"token":"t"}"#;
        let parsed: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.id, "42");
        assert_eq!(parsed.token, "t");
    }
}
