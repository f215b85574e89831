//! Integration tests for the HTTP auth client.
//!
//! These tests run a small axum backend on an ephemeral port so the client is
//! exercised over a real socket.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use auth_api::{AuthApi, HttpAuthApi};
use common::{AppError, NETWORK_FAILURE_MESSAGE, TIMEOUT_MESSAGE};
use domain::{Credentials, LoginResponse, User};

// =============================================================================
// Test Backend
// =============================================================================

const TOKEN: &str = "server-issued-token";

fn test_user() -> User {
    User {
        id: "7".to_string(),
        email: "user@example.com".to_string(),
        name: "Jane Roe".to_string(),
    }
}

async fn login(Json(credentials): Json<Credentials>) -> Response {
    match (credentials.email.as_str(), credentials.password.as_str()) {
        ("user@example.com", "password") => Json(LoginResponse {
            user: test_user(),
            token: TOKEN.to_string(),
        })
        .into_response(),
        ("locked@example.com", _) => (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "Account locked" })),
        )
            .into_response(),
        ("teapot@example.com", _) => (StatusCode::IM_A_TEAPOT, "").into_response(),
        ("silent@example.com", _) => StatusCode::UNAUTHORIZED.into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid credentials" }
            })),
        )
            .into_response(),
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

async fn logout(headers: HeaderMap) -> StatusCode {
    if authorized(&headers) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn me(headers: HeaderMap) -> Response {
    if authorized(&headers) {
        Json(test_user()).into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

async fn garbage() -> &'static str {
    "not json"
}

async fn slow() -> StatusCode {
    tokio::time::sleep(Duration::from_secs(2)).await;
    StatusCode::NO_CONTENT
}

async fn spawn_backend() -> SocketAddr {
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me));

    spawn(app).await
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr) -> HttpAuthApi {
    HttpAuthApi::new(format!("http://{}/", addr), Duration::from_secs(5)).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_login_success() {
    let api = client(spawn_backend().await);

    let response = api
        .login(&Credentials::new("user@example.com", "password"))
        .await
        .unwrap();

    assert_eq!(response.token, TOKEN);
    assert_eq!(response.user, test_user());
}

#[tokio::test]
async fn test_login_unauthorized_uses_server_message() {
    let api = client(spawn_backend().await);

    let err = api
        .login(&Credentials::new("user@example.com", "wrong-password"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Authentication(_)));
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn test_login_other_status_carries_flat_message() {
    let api = client(spawn_backend().await);

    let err = api
        .login(&Credentials::new("locked@example.com", "password"))
        .await
        .unwrap_err();

    match err {
        AppError::Http { status, ref message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Account locked");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_error_body_gets_fallback_message() {
    let api = client(spawn_backend().await);

    let err = api
        .login(&Credentials::new("teapot@example.com", "password"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Request failed.");
}

#[tokio::test]
async fn test_me_and_logout_send_bearer_token() {
    let api = client(spawn_backend().await);

    assert_eq!(api.current_user(TOKEN).await.unwrap(), test_user());
    tokio_test::assert_ok!(api.logout(TOKEN).await);

    assert!(matches!(
        api.current_user("stale").await,
        Err(AppError::Unauthorized)
    ));
    assert!(matches!(api.logout("stale").await, Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn test_bare_401_on_login_is_invalid_credentials() {
    let api = client(spawn_backend().await);

    let err = api
        .login(&Credentials::new("silent@example.com", "password"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials), "{:?}", err);
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let addr = spawn(Router::new().route("/auth/login", post(slow))).await;
    let api = HttpAuthApi::new(format!("http://{}", addr), Duration::from_millis(100)).unwrap();

    let err = api
        .login(&Credentials::new("user@example.com", "password"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Timeout(_)), "{:?}", err);
    assert_eq!(err.code(), "TIMEOUT");
    assert_eq!(err.user_message(), TIMEOUT_MESSAGE);
}

#[tokio::test]
async fn test_undecodable_body_is_parse_error() {
    let addr = spawn(Router::new().route("/auth/login", post(garbage))).await;
    let api = client(addr);

    let err = api
        .login(&Credentials::new("user@example.com", "password"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Parse(_)));
    assert_eq!(err.user_message(), "An error occurred");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr)
        .login(&Credentials::new("user@example.com", "password"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Network(_)), "{:?}", err);
    let message = err.user_message();
    assert_eq!(message, NETWORK_FAILURE_MESSAGE);
    assert!(!message.contains("http://"));
    assert!(!message.contains(&addr.to_string()));
}
