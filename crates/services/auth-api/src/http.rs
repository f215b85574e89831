//! HTTP client for a real auth backend.
//!
//! Endpoints: `POST /auth/login`, `POST /auth/logout`, `GET /auth/me`.
//! Error bodies are sanitized before they reach the user.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use common::{AppError, AppResult};
use domain::{Credentials, LoginResponse, User, BEARER_TOKEN_PREFIX};

use crate::api::AuthApi;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";
const ME_PATH: &str = "/auth/me";

/// Auth backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

impl HttpAuthApi {
    /// Build a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    #[instrument(skip_all)]
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse> {
        let url = self.url(LOGIN_PATH);
        debug!(email = %credentials.email, "POST {}", url);

        let response = self.client.post(&url).json(credentials).send().await?;
        handle_json_response(response, Rejection::Credentials).await
    }

    #[instrument(skip_all)]
    async fn logout(&self, token: &str) -> AppResult<()> {
        let url = self.url(LOGOUT_PATH);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, bearer(token))
            .send()
            .await?;
        handle_empty_response(response, Rejection::Token).await
    }

    #[instrument(skip_all)]
    async fn current_user(&self, token: &str) -> AppResult<User> {
        let url = self.url(ME_PATH);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, bearer(token))
            .send()
            .await?;
        handle_json_response(response, Rejection::Token).await
    }
}

fn bearer(token: &str) -> String {
    format!("{}{}", BEARER_TOKEN_PREFIX, token)
}

/// Builds a URL from a base URL and path, tolerating stray slashes.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// What a bare 401 means for the request that received it.
#[derive(Debug, Clone, Copy)]
enum Rejection {
    /// The submitted email/password pair was refused
    Credentials,
    /// The bearer token was refused
    Token,
}

async fn handle_json_response<T: DeserializeOwned>(
    response: Response,
    rejection: Rejection,
) -> AppResult<T> {
    if response.status().is_success() {
        Ok(response.json::<T>().await?)
    } else {
        Err(error_from_response(response, rejection).await)
    }
}

async fn handle_empty_response(response: Response, rejection: Rejection) -> AppResult<()> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response, rejection).await)
    }
}

async fn error_from_response(response: Response, rejection: Rejection) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body);

    if status == StatusCode::UNAUTHORIZED {
        match (message, rejection) {
            (Some(message), _) => AppError::Authentication(message),
            (None, Rejection::Credentials) => AppError::InvalidCredentials,
            (None, Rejection::Token) => AppError::Unauthorized,
        }
    } else {
        AppError::Http {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| "Request failed.".to_string()),
        }
    }
}

/// Error body shapes understood by the client.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Nested { error: ErrorDetail },
    Flat { message: String },
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Pull a readable message out of an error body, if there is one.
fn extract_message(body: &str) -> Option<String> {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Nested { error }) => error.message,
        Ok(ErrorBody::Flat { message }) => message,
        Err(_) => body.to_string(),
    };

    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}
