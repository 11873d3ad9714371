//! Broadcast Bus の実装
//!
//! - `in_memory`: `tokio::sync::broadcast` による単一プロセス内のトピック
//! - `redis_pubsub`: Redis の PUBLISH / SUBSCRIBE

pub mod in_memory;
pub mod redis_pubsub;

pub use in_memory::InMemoryMessageBus;
pub use redis_pubsub::RedisMessageBus;

/// Redis channel carrying rendered chat lines
pub const CHAT_CHANNEL: &str = "chat_channel";
