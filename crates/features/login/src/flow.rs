//! Login submission flow.
//!
//! `submit` validates the input, makes a single call to the authentication
//! collaborator and persists the returned token. Progress is published on a
//! watch channel: `Idle -> Submitting -> {Succeeded, Failed}`, and any later
//! submission goes back through `Submitting`.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use auth_api::AuthApi;
use common::AppResult;
use domain::{
    validate, AuthOutcome, AuthState, Credentials, FieldErrors, Session, User, ValidationResult,
    GENERIC_FAILURE_MESSAGE,
};
use storage::TokenStore;

/// Where the most recent submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(Session),
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

impl From<&SubmissionState> for AuthState {
    fn from(state: &SubmissionState) -> Self {
        match state {
            SubmissionState::Idle => AuthState::default(),
            SubmissionState::Submitting => AuthState {
                is_loading: true,
                ..AuthState::default()
            },
            SubmissionState::Succeeded(session) => AuthState {
                user: Some(session.user().clone()),
                token: Some(session.token().to_string()),
                ..AuthState::default()
            },
            SubmissionState::Failed(message) => AuthState {
                error: Some(message.clone()),
                ..AuthState::default()
            },
        }
    }
}

/// Orchestrates validation, authentication and token storage.
///
/// Overlapping submissions are not coordinated; callers are expected to
/// disable their submit control while the state is `Submitting`.
pub struct LoginFlow {
    api: Arc<dyn AuthApi>,
    tokens: TokenStore,
    state: watch::Sender<SubmissionState>,
}

impl LoginFlow {
    pub fn new(api: Arc<dyn AuthApi>, tokens: TokenStore) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self { api, tokens, state }
    }

    /// Current submission state.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Receive every state transition from now on.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Snapshot of the client-side auth state.
    pub fn auth_state(&self) -> AuthState {
        AuthState::from(&*self.state.borrow())
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Validate and submit credentials.
    ///
    /// Invalid input is returned as `Err` without contacting the backend or
    /// touching storage and state. Otherwise exactly one login attempt is
    /// made and its outcome returned.
    pub async fn submit(&self, input: Credentials) -> Result<AuthOutcome, FieldErrors> {
        let credentials = match validate(input) {
            ValidationResult::Valid(credentials) => credentials,
            ValidationResult::Invalid(errors) => {
                debug!(errors = %errors, "login form rejected");
                return Err(errors);
            }
        };

        self.state.send_replace(SubmissionState::Submitting);

        let outcome = self.authenticate(&credentials).await;
        let next = match &outcome {
            AuthOutcome::Success(session) => SubmissionState::Succeeded(session.clone()),
            AuthOutcome::Failure(message) => SubmissionState::Failed(message.clone()),
        };
        self.state.send_replace(next);

        Ok(outcome)
    }

    async fn authenticate(&self, credentials: &Credentials) -> AuthOutcome {
        match self.try_authenticate(credentials).await {
            Ok(session) => {
                info!(user_id = %session.user().id, "login succeeded");
                AuthOutcome::Success(session)
            }
            Err(err) => {
                warn!(code = err.code(), "login failed");
                let message = err.user_message();
                if message.trim().is_empty() {
                    AuthOutcome::Failure(GENERIC_FAILURE_MESSAGE.to_string())
                } else {
                    AuthOutcome::Failure(message)
                }
            }
        }
    }

    async fn try_authenticate(&self, credentials: &Credentials) -> AppResult<Session> {
        let response = self.api.login(credentials).await?;
        self.tokens.save(&response.token).await?;
        Ok(Session::from(response))
    }

    /// End the session.
    ///
    /// The stored token is removed even when the backend call fails; the
    /// backend error is still reported.
    pub async fn logout(&self) -> AppResult<()> {
        let remote = match self.tokens.load().await? {
            Some(token) => self.api.logout(&token).await,
            None => Ok(()),
        };
        if let Err(ref err) = remote {
            warn!(code = err.code(), "backend logout failed");
        }

        let cleared = self.tokens.clear().await;
        self.state.send_replace(SubmissionState::Idle);
        info!("logged out");

        remote.and(cleared)
    }

    /// User owning the stored token, or `None` when no token is stored.
    pub async fn current_user(&self) -> AppResult<Option<User>> {
        let Some(token) = self.tokens.load().await? else {
            return Ok(None);
        };
        self.api.current_user(&token).await.map(Some)
    }
}

impl std::fmt::Debug for LoginFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginFlow")
            .field("tokens", &self.tokens)
            .field("state", &*self.state.borrow())
            .finish()
    }
}
