//! In-process placeholder backend.
//!
//! Accepts exactly one credential pair after a fixed delay. This is demo
//! scaffolding, not a credential policy.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use common::{AppError, AppResult};
use domain::{Credentials, LoginResponse, User};

use crate::api::AuthApi;

/// Email accepted by the stub
pub const STUB_EMAIL: &str = "user@example.com";

/// Password accepted by the stub
pub const STUB_PASSWORD: &str = "password";

/// Token issued by the stub
pub const STUB_TOKEN: &str = "mock-jwt-token";

const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(1000);

/// Stub authentication backend with simulated network latency.
#[derive(Debug, Clone)]
pub struct StubAuthApi {
    login_latency: Duration,
    session_latency: Duration,
}

impl StubAuthApi {
    /// Stub with the default delays (1s login, 500ms logout/profile).
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LOGIN_LATENCY)
    }

    /// Stub whose login takes `login_latency`; logout and profile take half.
    pub fn with_latency(login_latency: Duration) -> Self {
        Self {
            login_latency,
            session_latency: login_latency / 2,
        }
    }

    /// Stub that answers immediately.
    pub fn instant() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    fn user() -> User {
        User {
            id: "1".to_string(),
            email: STUB_EMAIL.to_string(),
            name: "John Doe".to_string(),
        }
    }

    async fn simulate(&self, latency: Duration) {
        if !latency.is_zero() {
            sleep(latency).await;
        }
    }
}

impl Default for StubAuthApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthApi for StubAuthApi {
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse> {
        debug!(email = %credentials.email, "stub login");
        self.simulate(self.login_latency).await;

        if credentials.email == STUB_EMAIL && credentials.password == STUB_PASSWORD {
            return Ok(LoginResponse {
                user: Self::user(),
                token: STUB_TOKEN.to_string(),
            });
        }

        Err(AppError::InvalidCredentials)
    }

    async fn logout(&self, _token: &str) -> AppResult<()> {
        self.simulate(self.session_latency).await;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> AppResult<User> {
        self.simulate(self.session_latency).await;

        if token != STUB_TOKEN {
            return Err(AppError::Unauthorized);
        }
        Ok(Self::user())
    }
}
