//! InMemory History Store 実装

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{HistoryError, HistoryStore, RenderedLine};

/// インメモリの履歴ストア
///
/// `limit` が設定されている場合、超過分は古い行から捨てられます。
#[derive(Default)]
pub struct InMemoryHistoryStore {
    lines: Mutex<VecDeque<RenderedLine>>,
    limit: Option<usize>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            lines: Mutex::new(VecDeque::new()),
            limit,
        }
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn append(&self, line: &RenderedLine) -> Result<(), HistoryError> {
        let mut lines = self.lines.lock().await;
        lines.push_back(line.clone());
        if let Some(limit) = self.limit {
            while lines.len() > limit {
                lines.pop_front();
            }
        }
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<RenderedLine>, HistoryError> {
        let lines = self.lines.lock().await;
        Ok(lines.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> RenderedLine {
        RenderedLine::from_rendered(text)
    }

    #[tokio::test]
    async fn test_load_all_on_empty_store() {
        // テスト項目: 一度も追記していない履歴は空
        // given (前提条件):
        let store = InMemoryHistoryStore::new();

        // when (操作):
        let lines = store.load_all().await.unwrap();

        // then (期待する結果):
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_load_all_returns_append_order() {
        // テスト項目: 追記した順（古い順）に履歴が返される
        // given (前提条件):
        let store = InMemoryHistoryStore::new();
        for text in ["a: hi", "b: yo", "a: bye"] {
            store.append(&line(text)).await.unwrap();
        }

        // when (操作):
        let lines = store.load_all().await.unwrap();

        // then (期待する結果):
        assert_eq!(lines, vec![line("a: hi"), line("b: yo"), line("a: bye")]);
    }

    #[tokio::test]
    async fn test_limit_drops_oldest_lines() {
        // テスト項目: 上限を超えると古い行から捨てられる
        // given (前提条件):
        let store = InMemoryHistoryStore::with_limit(Some(2));

        // when (操作):
        for text in ["a: 1", "a: 2", "a: 3"] {
            store.append(&line(text)).await.unwrap();
        }

        // then (期待する結果):
        let lines = store.load_all().await.unwrap();
        assert_eq!(lines, vec![line("a: 2"), line("a: 3")]);
    }
}
