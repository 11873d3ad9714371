//! UseCase: クライアント接続処理
//!
//! WebSocket が確立した接続に ConnectionId を払い出し、identity 未バインドの
//! 状態でレジストリに登録します。

use std::sync::Arc;

use chatline_shared::time::Clock;

use crate::domain::{ConnectionId, ConnectionRegistry, ConnectionSender, Timestamp};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// 接続レジストリ
    registry: Arc<dyn ConnectionRegistry>,
    /// 接続時刻の取得元
    clock: Arc<dyn Clock>,
}

impl ConnectClientUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// 接続を登録し、払い出した ConnectionId を返す
    ///
    /// # Arguments
    ///
    /// * `sender` - この接続の WebSocket 書き込みタスクへのチャンネル
    pub async fn execute(&self, sender: ConnectionSender) -> ConnectionId {
        let connection_id = ConnectionId::generate();
        let connected_at = Timestamp::new(self.clock.now_millis());
        if !self
            .registry
            .register(connection_id, sender, connected_at)
            .await
        {
            // the existing entry is kept
            tracing::debug!("Connection '{}' was already registered", connection_id);
        }
        connection_id
    }
}
