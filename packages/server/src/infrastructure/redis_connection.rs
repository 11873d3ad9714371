//! Redis 接続の生成
//!
//! `REDIS_URL` に加えて `REDIS_USERNAME` / `REDIS_PASSWORD` を個別に指定できます。

use redis::{Client, IntoConnectionInfo, RedisResult, aio::ConnectionManager};

/// Redis connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisSettings {
    /// e.g. `redis://127.0.0.1:6379`
    pub url: String,
    /// Overrides the username in `url` when set
    pub username: Option<String>,
    /// Overrides the password in `url` when set
    pub password: Option<String>,
}

impl RedisSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }
}

/// Build a Redis client with the credentials applied.
///
/// Empty credential strings are treated as unset.
pub fn open_client(settings: &RedisSettings) -> RedisResult<Client> {
    let mut info = settings.url.as_str().into_connection_info()?;
    if let Some(username) = settings.username.as_ref().filter(|u| !u.is_empty()) {
        info.redis.username = Some(username.clone());
    }
    if let Some(password) = settings.password.as_ref().filter(|p| !p.is_empty()) {
        info.redis.password = Some(password.clone());
    }
    Client::open(info)
}

/// Open a reconnecting connection manager for commands (GET / LPUSH / PUBLISH ...).
pub async fn connect_manager(client: &Client) -> RedisResult<ConnectionManager> {
    ConnectionManager::new(client.clone()).await
}
