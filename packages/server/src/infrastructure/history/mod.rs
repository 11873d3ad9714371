//! History Store の実装
//!
//! - `in_memory`: プロセス内の `VecDeque`、上限指定時は古い行から破棄（開発・テスト用）
//! - `redis_list`: Redis の list（`LPUSH` / `LTRIM` / `LRANGE`）

pub mod in_memory;
pub mod redis_list;

pub use in_memory::InMemoryHistoryStore;
pub use redis_list::RedisHistoryStore;

/// Redis key of the chat history list
pub const HISTORY_KEY: &str = "chat_messages";
