//! Identity Provider の実装
//!
//! - `frame`: init フレームの `username` をそのまま信頼する実装
//! - `redis_lookup`: 登録済みユーザーを Redis の `userID:<id>` キーから引く実装

pub mod frame;
pub mod redis_lookup;

pub use frame::FrameIdentityProvider;
pub use redis_lookup::RedisIdentityProvider;
