//! Token persistence scoped to a single storage key.

use std::sync::Arc;

use common::AppResult;

use crate::KeyValueStorage;

/// Reads and writes the access token under one well-known key.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist the token, replacing any previous one.
    pub async fn save(&self, token: &str) -> AppResult<()> {
        self.storage.set(&self.key, token).await
    }

    /// Read the stored token, if any.
    pub async fn load(&self) -> AppResult<Option<String>> {
        self.storage.get(&self.key).await
    }

    /// Forget the stored token.
    pub async fn clear(&self) -> AppResult<()> {
        self.storage.remove(&self.key).await
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").field("key", &self.key).finish()
    }
}
