//! UseCase: チャット送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendChatUseCase::execute() メソッド
//! - 履歴への追記 → Bus への publish の順序と、それぞれの失敗の扱い
//!
//! ### なぜこのテストが必要か
//! - 送信はベストエフォート（fire-and-forget）であり、片方が失敗しても
//!   もう片方は実行され、送信者にはエラーが返らないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：追記と publish の両方が成功
//! - 異常系：履歴ストアの障害、Bus の障害

use std::sync::Arc;

use crate::domain::{HistoryStore, MessageBus, RenderedLine};

/// Outcome of one send, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendReport {
    pub persisted: bool,
    pub published: bool,
}

/// チャット送信のユースケース
pub struct SendChatUseCase {
    history: Arc<dyn HistoryStore>,
    bus: Arc<dyn MessageBus>,
}

impl SendChatUseCase {
    pub fn new(history: Arc<dyn HistoryStore>, bus: Arc<dyn MessageBus>) -> Self {
        Self { history, bus }
    }

    /// 行を履歴に追記し、Bus に publish する
    ///
    /// どちらの失敗もログに残すだけで、リトライも呼び出し元への通知もしない。
    pub async fn execute(&self, line: &RenderedLine) -> SendReport {
        let persisted = match self.history.append(line).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to append to history: {}", e);
                false
            }
        };

        let published = match self.bus.publish(line).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to publish to bus: {}", e);
                false
            }
        };

        SendReport {
            persisted,
            published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BusError, HistoryError, bus::MockMessageBus, history::MockHistoryStore,
    };
    use mockall::Sequence;

    fn line(text: &str) -> RenderedLine {
        RenderedLine::from_rendered(text)
    }

    #[tokio::test]
    async fn test_send_appends_then_publishes() {
        // テスト項目: 履歴への追記の後に Bus への publish が行われる
        // given (前提条件):
        let mut seq = Sequence::new();
        let mut history = MockHistoryStore::new();
        let mut bus = MockMessageBus::new();
        history
            .expect_append()
            .withf(|l| l.as_str() == "alice: hello")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        bus.expect_publish()
            .withf(|l| l.as_str() == "alice: hello")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let usecase = SendChatUseCase::new(Arc::new(history), Arc::new(bus));

        // when (操作):
        let report = usecase.execute(&line("alice: hello")).await;

        // then (期待する結果):
        assert_eq!(
            report,
            SendReport {
                persisted: true,
                published: true
            }
        );
    }

    #[tokio::test]
    async fn test_history_failure_still_publishes() {
        // テスト項目: 履歴ストアが失敗しても publish は行われる
        // given (前提条件):
        let mut history = MockHistoryStore::new();
        let mut bus = MockMessageBus::new();
        history
            .expect_append()
            .returning(|_| Err(HistoryError::Store("READONLY".to_string())));
        bus.expect_publish().times(1).returning(|_| Ok(()));
        let usecase = SendChatUseCase::new(Arc::new(history), Arc::new(bus));

        // when (操作):
        let report = usecase.execute(&line("alice: hello")).await;

        // then (期待する結果):
        assert!(!report.persisted);
        assert!(report.published);
    }

    #[tokio::test]
    async fn test_bus_failure_is_swallowed() {
        // テスト項目: publish の失敗は送信者に返らない（追記は成功のまま）
        // given (前提条件):
        let mut history = MockHistoryStore::new();
        let mut bus = MockMessageBus::new();
        history.expect_append().returning(|_| Ok(()));
        bus.expect_publish()
            .returning(|_| Err(BusError::Publish("broken pipe".to_string())));
        let usecase = SendChatUseCase::new(Arc::new(history), Arc::new(bus));

        // when (操作):
        let report = usecase.execute(&line("alice: hello")).await;

        // then (期待する結果):
        assert!(report.persisted);
        assert!(!report.published);
    }
}
