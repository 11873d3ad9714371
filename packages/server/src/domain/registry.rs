//! Connection Registry trait 定義
//!
//! 接続中のクライアントと、それぞれにバインドされた identity の集合。
//! 全ての操作は単一の排他制御のもとで行われる必要があります
//! （fan-out がマップを走査する間にセッションが登録・削除を行うため）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, RenderedLine, Timestamp, UserId};

/// Channel feeding one connection's WebSocket writer task.
///
/// A send fails once the writer task has stopped (the socket write failed or
/// the connection closed).
pub type ConnectionSender = mpsc::UnboundedSender<String>;

/// Point-in-time view of one registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSnapshot {
    pub connection_id: ConnectionId,
    pub user_id: Option<UserId>,
    pub connected_at: Timestamp,
}

/// Result of one fan-out over the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Number of connections the line was handed to
    pub delivered: usize,
    /// Connections whose write failed and which were removed
    pub pruned: Vec<ConnectionId>,
}

/// Set of currently open connections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Add a connection with an unbound identity.
    ///
    /// Returns `false` (and changes nothing) if the connection is already registered.
    async fn register(
        &self,
        connection_id: ConnectionId,
        sender: ConnectionSender,
        connected_at: Timestamp,
    ) -> bool;

    /// Bind an identity to a registered connection. Returns `false` if absent.
    async fn bind_identity(&self, connection_id: &ConnectionId, user_id: UserId) -> bool;

    /// Remove a connection. Returns `false` if it was already gone.
    async fn unregister(&self, connection_id: &ConnectionId) -> bool;

    /// Write `line` to every registered connection.
    ///
    /// Connections whose write fails are removed while the registry is still
    /// locked, and delivery to the remaining connections continues.
    async fn broadcast(&self, line: &RenderedLine) -> BroadcastReport;

    /// Number of registered connections
    async fn count(&self) -> usize;

    /// Entries ordered by connection time
    async fn snapshot(&self) -> Vec<ConnectionSnapshot>;
}
