//! Identity provider backed by the user store in Redis.
//!
//! Registration writes `userID:<id> -> username`; this provider only reads it.

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::domain::{DisplayName, IdentityError, IdentityProvider, UserId};

/// Key prefix of the user id to username mapping
pub const USER_ID_KEY_PREFIX: &str = "userID:";

pub struct RedisIdentityProvider {
    redis: ConnectionManager,
}

impl RedisIdentityProvider {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }
}

fn user_key(token: &UserId) -> String {
    format!("{}{}", USER_ID_KEY_PREFIX, token.as_str())
}

#[async_trait]
impl IdentityProvider for RedisIdentityProvider {
    async fn resolve(
        &self,
        token: &UserId,
        _claimed_name: &DisplayName,
    ) -> Result<DisplayName, IdentityError> {
        self.lookup(token).await
    }

    async fn lookup(&self, token: &UserId) -> Result<DisplayName, IdentityError> {
        let mut conn = self.redis.clone();
        let username: Option<String> = conn
            .get(user_key(token))
            .await
            .map_err(|e| IdentityError::Upstream(e.to_string()))?;
        username
            .map(DisplayName::new)
            .ok_or_else(|| IdentityError::NotFound(token.as_str().to_string()))
    }
}
