//! UseCase: クライアント切断処理
//!
//! 読み込みが失敗・終了した接続をレジストリから削除します。fan-out 中の
//! 書き込み失敗で既に削除されている場合は何もしません。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectClientUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 接続を削除する
    ///
    /// # Returns
    ///
    /// この呼び出しで削除した場合は `true`、既に削除済みなら `false`
    pub async fn execute(&self, connection_id: &ConnectionId) -> bool {
        self.registry.unregister(connection_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::Timestamp, infrastructure::registry::InMemoryConnectionRegistry};
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_disconnect_removes_connection_once() {
        // テスト項目: 切断で接続が削除され、2 回目は何もしない
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = DisconnectClientUseCase::new(registry.clone());
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();
        let alice = ConnectionId::generate();
        let bob = ConnectionId::generate();
        registry.register(alice, tx1, Timestamp::new(1)).await;
        registry.register(bob, tx2, Timestamp::new(2)).await;

        // when (操作):
        let first = usecase.execute(&alice).await;
        let second = usecase.execute(&alice).await;

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert_eq!(registry.count().await, 1);
    }
}
