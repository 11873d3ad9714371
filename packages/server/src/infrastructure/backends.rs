//! Construction of the external collaborators for a given configuration.

use std::sync::Arc;

use crate::{
    config::{BackendKind, IdentityMode, ServerConfig},
    domain::{HistoryStore, IdentityProvider, MessageBus},
};

use super::{
    bus::{CHAT_CHANNEL, InMemoryMessageBus, RedisMessageBus},
    history::{HISTORY_KEY, InMemoryHistoryStore, RedisHistoryStore},
    identity::{FrameIdentityProvider, RedisIdentityProvider},
    redis_connection::{RedisSettings, connect_manager, open_client},
};

/// History store, bus and identity provider shared by the use cases
#[derive(Clone)]
pub struct Backends {
    pub history: Arc<dyn HistoryStore>,
    pub bus: Arc<dyn MessageBus>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl Backends {
    /// Single-process backends; nothing survives a restart.
    pub fn in_memory(history_limit: Option<usize>) -> Self {
        Self {
            history: Arc::new(InMemoryHistoryStore::with_limit(history_limit)),
            bus: Arc::new(InMemoryMessageBus::new()),
            identity: Arc::new(FrameIdentityProvider::new()),
        }
    }

    /// Redis-backed history and bus. The identity provider follows `identity`.
    pub async fn redis(
        settings: &RedisSettings,
        history_limit: Option<usize>,
        identity: IdentityMode,
    ) -> redis::RedisResult<Self> {
        let client = open_client(settings)?;
        let manager = connect_manager(&client).await?;
        tracing::info!("Connected to Redis at {}", client.get_connection_info().addr);

        let identity: Arc<dyn IdentityProvider> = match identity {
            IdentityMode::Frame => Arc::new(FrameIdentityProvider::new()),
            IdentityMode::Redis => Arc::new(RedisIdentityProvider::new(manager.clone())),
        };

        Ok(Self {
            history: Arc::new(RedisHistoryStore::new(
                manager.clone(),
                HISTORY_KEY,
                history_limit,
            )),
            bus: Arc::new(RedisMessageBus::new(client, manager, CHAT_CHANNEL)),
            identity,
        })
    }

    pub async fn from_config(config: &ServerConfig) -> redis::RedisResult<Self> {
        match config.backend {
            BackendKind::Memory => Ok(Self::in_memory(config.history_limit)),
            BackendKind::Redis => {
                Self::redis(&config.redis, config.history_limit, config.identity).await
            }
        }
    }
}
