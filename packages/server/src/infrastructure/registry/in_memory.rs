//! InMemory ConnectionRegistry 実装
//!
//! ## 責務
//!
//! - 接続ごとの `ConnectionSender` と bind 済み identity の管理
//! - fan-out（broadcast）時の書き込みと、失敗した接続の削除
//!
//! ## 設計ノート
//!
//! 全ての操作は 1 つの `Mutex` で直列化されます。broadcast は走査と削除を
//! 同じロック区間で行うため、削除済みの接続に書き込むことはありません。
//! `UnboundedSender::send` は await しないので、ロック保持中に I/O 待ちは発生しません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    BroadcastReport, ConnectionId, ConnectionRegistry, ConnectionSender, ConnectionSnapshot,
    RenderedLine, Timestamp, UserId,
};

/// One registered connection
struct ConnectionEntry {
    sender: ConnectionSender,
    user_id: Option<UserId>,
    connected_at: Timestamp,
}

/// インメモリの接続レジストリ
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    /// Key: ConnectionId, Value: 送信チャンネルと bind 済み identity
    entries: Mutex<HashMap<ConnectionId, ConnectionEntry>>,
}

impl InMemoryConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(
        &self,
        connection_id: ConnectionId,
        sender: ConnectionSender,
        connected_at: Timestamp,
    ) -> bool {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(&connection_id) {
            tracing::debug!("Connection '{}' is already registered", connection_id);
            return false;
        }
        entries.insert(
            connection_id,
            ConnectionEntry {
                sender,
                user_id: None,
                connected_at,
            },
        );
        tracing::debug!("Connection '{}' registered", connection_id);
        true
    }

    async fn bind_identity(&self, connection_id: &ConnectionId, user_id: UserId) -> bool {
        let mut entries = self.entries.lock().await;
        match entries.get_mut(connection_id) {
            Some(entry) => {
                tracing::debug!(
                    "Connection '{}' bound to user '{}'",
                    connection_id,
                    user_id.as_str()
                );
                entry.user_id = Some(user_id);
                true
            }
            None => false,
        }
    }

    async fn unregister(&self, connection_id: &ConnectionId) -> bool {
        let mut entries = self.entries.lock().await;
        let removed = entries.remove(connection_id).is_some();
        if removed {
            tracing::debug!("Connection '{}' unregistered", connection_id);
        }
        removed
    }

    async fn broadcast(&self, line: &RenderedLine) -> BroadcastReport {
        let mut entries = self.entries.lock().await;
        let mut report = BroadcastReport::default();

        for (connection_id, entry) in entries.iter() {
            if let Err(e) = entry.sender.send(line.as_str().to_string()) {
                tracing::warn!(
                    "Failed to push message to connection '{}': {}",
                    connection_id,
                    e
                );
                report.pruned.push(*connection_id);
            } else {
                report.delivered += 1;
            }
        }

        for connection_id in &report.pruned {
            entries.remove(connection_id);
        }

        report
    }

    async fn count(&self) -> usize {
        self.entries.lock().await.len()
    }

    async fn snapshot(&self) -> Vec<ConnectionSnapshot> {
        let entries = self.entries.lock().await;
        let mut snapshots: Vec<ConnectionSnapshot> = entries
            .iter()
            .map(|(connection_id, entry)| ConnectionSnapshot {
                connection_id: *connection_id,
                user_id: entry.user_id.clone(),
                connected_at: entry.connected_at,
            })
            .collect();

        snapshots.sort_by(|a, b| {
            a.connected_at
                .cmp(&b.connected_at)
                .then_with(|| a.connection_id.cmp(&b.connection_id))
        });

        snapshots
    }
}
