//! Identity provider that trusts the `init` frame.
//!
//! The display name a client claims is accepted as-is and remembered, so that
//! later lookups of the same user id return the last claimed name. Any client
//! can claim any user id, so the number of remembered ids is capped; the ids
//! claimed longest ago are forgotten first.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{DisplayName, IdentityError, IdentityProvider, UserId};

/// Number of user ids remembered by default
pub const DEFAULT_CAPACITY: usize = 10_000;

#[derive(Default)]
struct Known {
    names: HashMap<UserId, DisplayName>,
    /// First claim order, oldest at the front
    order: VecDeque<UserId>,
}

pub struct FrameIdentityProvider {
    known: Mutex<Known>,
    capacity: usize,
}

impl Default for FrameIdentityProvider {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl FrameIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// `capacity` is clamped to at least one id.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            known: Mutex::new(Known::default()),
            capacity: capacity.max(1),
        }
    }
}

#[async_trait]
impl IdentityProvider for FrameIdentityProvider {
    async fn resolve(
        &self,
        token: &UserId,
        claimed_name: &DisplayName,
    ) -> Result<DisplayName, IdentityError> {
        let mut known = self.known.lock().await;
        if known
            .names
            .insert(token.clone(), claimed_name.clone())
            .is_none()
        {
            known.order.push_back(token.clone());
        }
        while known.names.len() > self.capacity {
            let Some(oldest) = known.order.pop_front() else {
                break;
            };
            known.names.remove(&oldest);
        }
        Ok(claimed_name.clone())
    }

    async fn lookup(&self, token: &UserId) -> Result<DisplayName, IdentityError> {
        let known = self.known.lock().await;
        known
            .names
            .get(token)
            .cloned()
            .ok_or_else(|| IdentityError::NotFound(token.as_str().to_string()))
    }
}
