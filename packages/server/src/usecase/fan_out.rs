//! Fan-out listener: drains the broadcast bus into every registered connection.
//!
//! Exactly one listener runs per process, independent of any connection. It
//! handles one bus message at a time, so registry broadcasts never interleave
//! and every connection sees lines in bus order. Bus errors are logged and the
//! loop keeps going; the task ends only with the process.

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use crate::domain::{BroadcastReport, BusError, BusSubscription, ConnectionRegistry, MessageBus};

pub struct FanOutListener {
    bus: Arc<dyn MessageBus>,
    registry: Arc<dyn ConnectionRegistry>,
    retry_delay: Duration,
}

impl FanOutListener {
    /// # Arguments
    ///
    /// * `retry_delay` - pause after a bus transport error before reading again
    pub fn new(
        bus: Arc<dyn MessageBus>,
        registry: Arc<dyn ConnectionRegistry>,
        retry_delay: Duration,
    ) -> Self {
        Self {
            bus,
            registry,
            retry_delay,
        }
    }

    /// Subscribe to the bus and start the listener task.
    ///
    /// The subscription is connected before this returns, so lines published
    /// afterwards are not missed. If the bus is unreachable the failure is
    /// logged and the listener keeps retrying from its loop; lines published
    /// until it reconnects are lost.
    pub async fn spawn(self) -> JoinHandle<()> {
        let mut subscription = self.bus.subscribe();
        if let Err(e) = subscription.connect().await {
            tracing::warn!("Failed to connect bus subscription: {}", e);
        }
        tokio::spawn(async move { self.run(subscription).await })
    }

    /// Listen forever.
    pub async fn run(&self, mut subscription: Box<dyn BusSubscription>) {
        tracing::info!("Fan-out listener started");
        loop {
            if let Err(e) = self.step(&mut *subscription).await {
                tracing::warn!("Failed to receive from bus: {}", e);
                if e.should_back_off() {
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }
    }

    /// Receive one line from the bus and write it to every registered connection.
    pub async fn step(
        &self,
        subscription: &mut dyn BusSubscription,
    ) -> Result<BroadcastReport, BusError> {
        let line = subscription.recv().await?;
        let report = self.registry.broadcast(&line).await;
        tracing::debug!(
            "Fanned out '{}' to {} connection(s), pruned {}",
            line,
            report.delivered,
            report.pruned.len()
        );
        Ok(report)
    }
}
