//! Infrastructure 層
//!
//! ドメイン層の trait（HistoryStore / MessageBus / IdentityProvider /
//! ConnectionRegistry）の具体的な実装と、ワイヤーフォーマットの DTO を提供します。

pub mod backends;
pub mod bus;
pub mod dto;
pub mod history;
pub mod identity;
pub mod redis_connection;
pub mod registry;

pub use backends::Backends;
