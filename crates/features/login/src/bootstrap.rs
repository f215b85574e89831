//! Build a [`LoginFlow`] from environment configuration.

use std::sync::Arc;

use tracing::info;

use auth_api::{AuthApi, HttpAuthApi, StubAuthApi};
use common::{AppResult, AuthBackend, LoginConfig, StorageBackend};
use storage::{KeyValueStorage, MemoryStorage, TokenStore};

use crate::flow::LoginFlow;

impl LoginFlow {
    /// Assemble the collaborator and token storage selected by `config`.
    pub async fn from_config(config: &LoginConfig) -> AppResult<Self> {
        let api: Arc<dyn AuthApi> = match config.auth_backend {
            AuthBackend::Stub => Arc::new(StubAuthApi::with_latency(config.stub_latency())),
            AuthBackend::Http => Arc::new(HttpAuthApi::new(
                config.api_base_url.clone(),
                config.api_timeout(),
            )?),
        };

        let storage = build_storage(config).await?;
        info!(
            auth_backend = ?config.auth_backend,
            token_storage = ?config.token_storage,
            "login flow ready"
        );

        Ok(Self::new(
            api,
            TokenStore::new(storage, config.token_storage_key.clone()),
        ))
    }
}

async fn build_storage(config: &LoginConfig) -> AppResult<Arc<dyn KeyValueStorage>> {
    match config.token_storage {
        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
        #[cfg(feature = "redis")]
        StorageBackend::Redis => Ok(Arc::new(
            storage::RedisStorage::connect(&config.redis_url).await?,
        )),
        #[cfg(not(feature = "redis"))]
        StorageBackend::Redis => Err(common::AppError::config(
            "redis token storage requires the `redis` feature",
        )),
    }
}
