//! In-process bus backed by a `tokio::sync::broadcast` channel.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::{BusError, BusSubscription, MessageBus, RenderedLine};

/// Capacity of the broadcast channel. Subscribers that fall behind skip
/// messages and observe `BusError::Lagged`.
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Clone)]
pub struct InMemoryMessageBus {
    sender: broadcast::Sender<RenderedLine>,
}

impl Default for InMemoryMessageBus {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMessageBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }
}

#[async_trait]
impl MessageBus for InMemoryMessageBus {
    async fn publish(&self, line: &RenderedLine) -> Result<(), BusError> {
        // send() only fails when nobody is subscribed, which is not an error for a topic
        if self.sender.send(line.clone()).is_err() {
            tracing::debug!("Published to bus without subscribers");
        }
        Ok(())
    }

    fn subscribe(&self) -> Box<dyn BusSubscription> {
        Box::new(InMemorySubscription {
            receiver: self.sender.subscribe(),
        })
    }
}

struct InMemorySubscription {
    receiver: broadcast::Receiver<RenderedLine>,
}

#[async_trait]
impl BusSubscription for InMemorySubscription {
    async fn recv(&mut self) -> Result<RenderedLine, BusError> {
        self.receiver.recv().await.map_err(|e| match e {
            broadcast::error::RecvError::Lagged(skipped) => BusError::Lagged(skipped),
            broadcast::error::RecvError::Closed => BusError::Disconnected,
        })
    }
}
