//! Client-side key-value storage for the access token.
//!
//! Storage is a small capability trait so the login flow can run against an
//! in-memory map in tests and a persistent backend in real deployments.

mod memory;
#[cfg(feature = "redis")]
mod redis_store;
mod token;

use async_trait::async_trait;

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use memory::MemoryStorage;
#[cfg(feature = "redis")]
pub use redis_store::RedisStorage;
pub use token::TokenStore;

/// Minimal key-value capability. Writes overwrite (last write wins).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key` (no-op when absent)
    async fn remove(&self, key: &str) -> AppResult<()>;
}
