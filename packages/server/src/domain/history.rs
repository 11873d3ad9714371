//! History Store trait 定義
//!
//! チャット履歴（RenderedLine の追記専用ログ）へのインターフェース。
//! 具体的な実装（InMemory / Redis list）は Infrastructure 層が提供します。

use async_trait::async_trait;

use super::{HistoryError, RenderedLine};

/// Append-only, ordered log of rendered chat lines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append one line to the end of the log.
    async fn append(&self, line: &RenderedLine) -> Result<(), HistoryError>;

    /// Load the whole log, oldest line first.
    async fn load_all(&self) -> Result<Vec<RenderedLine>, HistoryError>;
}
