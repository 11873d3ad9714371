//! Broadcast Bus trait 定義
//!
//! 「メッセージが送信された」ことと「誰が現在受信しているか」を切り離す
//! publish/subscribe トピックへのインターフェース。

use async_trait::async_trait;

use super::{BusError, RenderedLine};

/// Receiving side of a bus subscription.
#[async_trait]
pub trait BusSubscription: Send {
    /// Establish the transport now instead of on the first `recv`.
    ///
    /// Lines published after a successful `connect` are delivered. Transports
    /// that are live from creation keep the default.
    async fn connect(&mut self) -> Result<(), BusError> {
        Ok(())
    }

    /// Wait for the next published line.
    ///
    /// Errors are not terminal: callers may keep calling `recv` on the same
    /// subscription, which re-establishes its transport when needed.
    async fn recv(&mut self) -> Result<RenderedLine, BusError>;
}

/// Publish/subscribe topic carrying rendered chat lines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageBus: Send + Sync {
    /// Publish a line to every current subscriber.
    async fn publish(&self, line: &RenderedLine) -> Result<(), BusError>;

    /// Open a new subscription. Lines published before this call are not delivered.
    fn subscribe(&self) -> Box<dyn BusSubscription>;
}
