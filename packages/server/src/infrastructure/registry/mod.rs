//! 接続レジストリの実装
//!
//! - `in_memory`: `tokio::sync::Mutex<HashMap>` による単一ガードの実装

pub mod in_memory;

pub use in_memory::InMemoryConnectionRegistry;
