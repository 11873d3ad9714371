//! Server configuration.
//!
//! Values come from command line flags or their environment variables
//! (see the server binary); this module holds the validated result.

use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;

use crate::infrastructure::redis_connection::RedisSettings;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8085;
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_BUS_RETRY_MS: u64 = 1000;

/// Where history and the bus live
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// In-process history and bus (single instance, not persisted)
    Memory,
    /// Redis list for history, Redis pub/sub for the bus
    Redis,
}

/// How `init` frames are turned into display names
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdentityMode {
    /// Trust the `username` sent in the frame
    Frame,
    /// Look the `userID` up in Redis (`userID:<id>`)
    Redis,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("identity mode 'redis' requires the redis backend")]
    IdentityRequiresRedis,

    #[error("history limit must be greater than zero")]
    ZeroHistoryLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub backend: BackendKind,
    pub redis: RedisSettings,
    pub identity: IdentityMode,
    /// Maximum number of history lines kept; `None` keeps everything
    pub history_limit: Option<usize>,
    /// Pause of the fan-out listener after a bus transport error
    pub bus_retry_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            backend: BackendKind::Memory,
            redis: RedisSettings::new(DEFAULT_REDIS_URL),
            identity: IdentityMode::Frame,
            history_limit: None,
            bus_retry_delay: Duration::from_millis(DEFAULT_BUS_RETRY_MS),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity == IdentityMode::Redis && self.backend != BackendKind::Redis {
            return Err(ConfigError::IdentityRequiresRedis);
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        // テスト項目: デフォルト設定は検証を通る
        // given (前提条件):
        let config = ServerConfig::default();

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(config.port, 8085);
        assert_eq!(config.backend, BackendKind::Memory);
    }

    #[test]
    fn test_redis_identity_requires_redis_backend() {
        // テスト項目: Redis identity はメモリバックエンドと組み合わせられない
        // given (前提条件):
        let config = ServerConfig {
            identity: IdentityMode::Redis,
            ..ServerConfig::default()
        };

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert_eq!(result, Err(ConfigError::IdentityRequiresRedis));
    }

    #[test]
    fn test_redis_identity_with_redis_backend_is_valid() {
        // テスト項目: Redis バックエンドなら Redis identity を使える
        // given (前提条件):
        let config = ServerConfig {
            backend: BackendKind::Redis,
            identity: IdentityMode::Redis,
            ..ServerConfig::default()
        };

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_zero_history_limit_is_rejected() {
        // テスト項目: 履歴上限 0 は拒否される
        // given (前提条件):
        let config = ServerConfig {
            history_limit: Some(0),
            ..ServerConfig::default()
        };

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert_eq!(result, Err(ConfigError::ZeroHistoryLimit));
    }
}
