//! Redis list を使った History Store 実装
//!
//! 行は `LPUSH` で先頭に積まれる（スタック）ため、最新の行が先に読める格納順です。
//! `load_all` は `LRANGE 0 -1` の結果を反転して古い順で返します。

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::domain::{HistoryError, HistoryStore, RenderedLine};

pub struct RedisHistoryStore {
    redis: ConnectionManager,
    key: String,
    limit: Option<usize>,
}

impl RedisHistoryStore {
    pub fn new(redis: ConnectionManager, key: impl Into<String>, limit: Option<usize>) -> Self {
        Self {
            redis,
            key: key.into(),
            limit,
        }
    }
}

#[async_trait]
impl HistoryStore for RedisHistoryStore {
    async fn append(&self, line: &RenderedLine) -> Result<(), HistoryError> {
        let mut conn = self.redis.clone();
        let mut pipe = redis::pipe();
        pipe.lpush(&self.key, line.as_str()).ignore();
        if let Some(limit) = self.limit {
            // newest lines sit at the head of the list
            pipe.ltrim(&self.key, 0, trim_stop(limit)).ignore();
        }
        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(|e| HistoryError::Store(e.to_string()))
    }

    async fn load_all(&self) -> Result<Vec<RenderedLine>, HistoryError> {
        let mut conn = self.redis.clone();
        let stored: Vec<String> = conn
            .lrange(&self.key, 0, -1)
            .await
            .map_err(|e| HistoryError::Store(e.to_string()))?;
        Ok(to_chronological(stored))
    }
}

/// `LTRIM` stop index keeping `limit` elements
fn trim_stop(limit: usize) -> isize {
    isize::try_from(limit).unwrap_or(isize::MAX).saturating_sub(1)
}

/// Turn the stack order of the list (newest first) into oldest-first lines.
fn to_chronological(stored: Vec<String>) -> Vec<RenderedLine> {
    stored
        .into_iter()
        .rev()
        .map(RenderedLine::from_rendered)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_chronological_reverses_stack_order() {
        // テスト項目: LPUSH で積まれた順（新しい順）が古い順に並べ替えられる
        // given (前提条件): "a: hi", "b: yo", "a: bye" の順に LPUSH した結果
        let stored = vec![
            "a: bye".to_string(),
            "b: yo".to_string(),
            "a: hi".to_string(),
        ];

        // when (操作):
        let lines = to_chronological(stored);

        // then (期待する結果):
        let texts: Vec<&str> = lines.iter().map(RenderedLine::as_str).collect();
        assert_eq!(texts, vec!["a: hi", "b: yo", "a: bye"]);
    }

    #[test]
    fn test_trim_stop_keeps_limit_elements() {
        // テスト項目: LTRIM の終端インデックスが上限件数に対応する
        // given (前提条件):

        // when (操作) / then (期待する結果):
        assert_eq!(trim_stop(100), 99);
        assert_eq!(trim_stop(1), 0);
    }
}
