//! Authentication collaborator contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{Credentials, LoginResponse, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Authentication service trait for dependency injection.
///
/// Implementations must reject bad credentials with an error whose
/// `user_message()` is readable by the end user.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a user and access token
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse>;

    /// End the session identified by `token`
    async fn logout(&self, token: &str) -> AppResult<()>;

    /// Fetch the user owning `token`
    async fn current_user(&self, token: &str) -> AppResult<User>;
}
