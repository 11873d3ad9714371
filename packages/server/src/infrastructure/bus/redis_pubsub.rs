//! Redis PUBLISH / SUBSCRIBE を使った Broadcast Bus 実装
//!
//! publish は共有の `ConnectionManager` 経由で行います。
//! 購読は専用の pub/sub 接続を使います。`connect` で即座に購読するか、
//! 最初の `recv` で遅延接続します。接続が切れた場合は次の `recv` で
//! 再接続・再購読します（切断中に publish された行は失われます）。

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::{Stream, StreamExt};
use redis::{AsyncCommands, Client, Msg, aio::ConnectionManager};

use crate::domain::{BusError, BusSubscription, MessageBus, RenderedLine};

type MessageStream = Pin<Box<dyn Stream<Item = Msg> + Send>>;

pub struct RedisMessageBus {
    client: Client,
    redis: ConnectionManager,
    channel: String,
}

impl RedisMessageBus {
    pub fn new(client: Client, redis: ConnectionManager, channel: impl Into<String>) -> Self {
        Self {
            client,
            redis,
            channel: channel.into(),
        }
    }
}

#[async_trait]
impl MessageBus for RedisMessageBus {
    async fn publish(&self, line: &RenderedLine) -> Result<(), BusError> {
        let mut conn = self.redis.clone();
        conn.publish::<_, _, ()>(&self.channel, line.as_str())
            .await
            .map_err(|e| BusError::Publish(e.to_string()))
    }

    fn subscribe(&self) -> Box<dyn BusSubscription> {
        Box::new(RedisSubscription {
            client: self.client.clone(),
            channel: self.channel.clone(),
            stream: None,
        })
    }
}

/// Lazily connected subscription; `stream` is `None` until the first `recv`
/// and again after a disconnect.
struct RedisSubscription {
    client: Client,
    channel: String,
    stream: Option<MessageStream>,
}

impl RedisSubscription {
    // borrows only the Sync fields so `recv` stays Send
    async fn open_stream(client: &Client, channel: &str) -> Result<MessageStream, BusError> {
        let mut pubsub = client
            .get_async_pubsub()
            .await
            .map_err(|e| BusError::Subscribe(e.to_string()))?;
        pubsub
            .subscribe(channel)
            .await
            .map_err(|e| BusError::Subscribe(e.to_string()))?;
        tracing::info!("Subscribed to Redis channel '{}'", channel);
        Ok(Box::pin(pubsub.into_on_message()))
    }
}

#[async_trait]
impl BusSubscription for RedisSubscription {
    async fn connect(&mut self) -> Result<(), BusError> {
        if self.stream.is_none() {
            let stream = Self::open_stream(&self.client, &self.channel).await?;
            self.stream = Some(stream);
        }
        Ok(())
    }

    async fn recv(&mut self) -> Result<RenderedLine, BusError> {
        self.connect().await?;
        let Some(stream) = self.stream.as_mut() else {
            return Err(BusError::Disconnected);
        };

        match stream.next().await {
            Some(msg) => msg
                .get_payload::<String>()
                .map(RenderedLine::from_rendered)
                .map_err(|e| BusError::Payload(e.to_string())),
            None => {
                self.stream = None;
                Err(BusError::Disconnected)
            }
        }
    }
}
