//! Login configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use domain::TOKEN_STORAGE_KEY;

/// Default base URL of the real auth backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default HTTP request timeout in milliseconds
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;

/// Default stub login latency in milliseconds
pub const DEFAULT_STUB_LATENCY_MS: u64 = 1_000;

/// Default Redis URL for persistent token storage
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Which authentication collaborator to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthBackend {
    /// In-process placeholder with one hardcoded credential pair
    #[default]
    Stub,
    /// Real backend over HTTP
    Http,
}

/// Where the access token is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Redis,
}

/// Login configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Authentication collaborator
    pub auth_backend: AuthBackend,
    /// Base URL of the HTTP auth backend
    pub api_base_url: String,
    /// HTTP request timeout in milliseconds
    pub api_timeout_ms: u64,
    /// Stub login latency in milliseconds (logout and profile use half)
    pub stub_latency_ms: u64,
    /// Token storage backend
    pub token_storage: StorageBackend,
    /// Key the token is stored under
    pub token_storage_key: String,
    /// Redis URL for the `redis` token storage
    pub redis_url: String,
}

impl LoginConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            auth_backend: match env::var("AUTH_BACKEND") {
                Ok(value) => parse_auth_backend(&value),
                Err(_) => AuthBackend::default(),
            },
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            api_timeout_ms: env::var("API_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_API_TIMEOUT_MS),
            stub_latency_ms: env::var("STUB_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_STUB_LATENCY_MS),
            token_storage: match env::var("TOKEN_STORAGE") {
                Ok(value) => parse_storage_backend(&value),
                Err(_) => StorageBackend::default(),
            },
            token_storage_key: env::var("TOKEN_STORAGE_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .unwrap_or_else(|| TOKEN_STORAGE_KEY.to_string()),
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
        }
    }

    /// HTTP request timeout.
    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }

    /// Stub latency for login.
    pub fn stub_latency(&self) -> Duration {
        Duration::from_millis(self.stub_latency_ms)
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            auth_backend: AuthBackend::Stub,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout_ms: DEFAULT_API_TIMEOUT_MS,
            stub_latency_ms: DEFAULT_STUB_LATENCY_MS,
            token_storage: StorageBackend::Memory,
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}

fn parse_auth_backend(value: &str) -> AuthBackend {
    match value.trim().to_ascii_lowercase().as_str() {
        "stub" | "mock" => AuthBackend::Stub,
        "http" => AuthBackend::Http,
        other => {
            tracing::warn!("Unknown AUTH_BACKEND '{}', falling back to stub", other);
            AuthBackend::default()
        }
    }
}

fn parse_storage_backend(value: &str) -> StorageBackend {
    match value.trim().to_ascii_lowercase().as_str() {
        "memory" => StorageBackend::Memory,
        "redis" => StorageBackend::Redis,
        other => {
            tracing::warn!("Unknown TOKEN_STORAGE '{}', falling back to memory", other);
            StorageBackend::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 7] = [
        "AUTH_BACKEND",
        "API_BASE_URL",
        "API_TIMEOUT_MS",
        "STUB_LATENCY_MS",
        "TOKEN_STORAGE",
        "TOKEN_STORAGE_KEY",
        "REDIS_URL",
    ];

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset(VARS, || {
            let config = LoginConfig::from_env();
            assert_eq!(config.auth_backend, AuthBackend::Stub);
            assert_eq!(config.token_storage, StorageBackend::Memory);
            assert_eq!(config.token_storage_key, "token");
            assert_eq!(config.stub_latency(), Duration::from_secs(1));
            assert_eq!(config.api_timeout(), Duration::from_secs(10));
        });
    }

    #[test]
    fn test_reads_environment() {
        temp_env::with_vars(
            [
                ("AUTH_BACKEND", Some("HTTP")),
                ("API_BASE_URL", Some("https://api.example.com")),
                ("API_TIMEOUT_MS", Some("2500")),
                ("TOKEN_STORAGE", Some("redis")),
                ("TOKEN_STORAGE_KEY", Some("access_token")),
                ("REDIS_URL", Some("redis://cache:6379")),
            ],
            || {
                let config = LoginConfig::from_env();
                assert_eq!(config.auth_backend, AuthBackend::Http);
                assert_eq!(config.api_base_url, "https://api.example.com");
                assert_eq!(config.api_timeout_ms, 2500);
                assert_eq!(config.token_storage, StorageBackend::Redis);
                assert_eq!(config.token_storage_key, "access_token");
                assert_eq!(config.redis_url, "redis://cache:6379");
            },
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        temp_env::with_vars(
            [
                ("AUTH_BACKEND", Some("carrier-pigeon")),
                ("STUB_LATENCY_MS", Some("soon")),
                ("TOKEN_STORAGE", Some("floppy")),
                ("TOKEN_STORAGE_KEY", Some("  ")),
            ],
            || {
                let config = LoginConfig::from_env();
                assert_eq!(config.auth_backend, AuthBackend::Stub);
                assert_eq!(config.stub_latency_ms, DEFAULT_STUB_LATENCY_MS);
                assert_eq!(config.token_storage, StorageBackend::Memory);
                assert_eq!(config.token_storage_key, TOKEN_STORAGE_KEY);
            },
        );
    }
}
