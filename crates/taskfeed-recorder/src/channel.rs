//! Outbound event channel port and in-memory adapter.

use std::collections::VecDeque;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use taskfeed_core::{DeliveredMessage, DigestBatch};

/// Errors on the publish path.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The channel rejected or failed to accept the message.
    #[error("channel rejected message: {0}")]
    Channel(String),

    /// The event could not be serialized into a message body.
    #[error("event serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Asynchronous, at-least-once message channel between recorder and digest.
#[async_trait]
pub trait EventChannel: Send + Sync {
    /// Enqueue a serialized event body. Returns once the channel has
    /// accepted the message.
    async fn publish(&self, body: String) -> Result<(), PublishError>;
}

/// In-memory [`EventChannel`] buffering published bodies in order.
///
/// `take_batch` plays the role of the external channel's batching policy:
/// it drains pending messages into a [`DigestBatch`], minting a fresh
/// receipt per delivery.
pub struct MemoryEventChannel {
    queue_name: String,
    pending: Mutex<VecDeque<String>>,
}

impl MemoryEventChannel {
    /// Create an empty channel named by its queue identifier.
    pub fn new(queue_name: impl Into<String>) -> Self {
        Self {
            queue_name: queue_name.into(),
            pending: Mutex::new(VecDeque::new()),
        }
    }

    /// Number of buffered, undelivered messages.
    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Drain up to `max` pending messages into a batch.
    pub async fn take_batch(&self, max: usize) -> DigestBatch {
        let mut pending = self.pending.lock().await;
        let take = max.min(pending.len());
        let messages = pending
            .drain(..take)
            .map(|body| DeliveredMessage {
                receipt: Uuid::new_v4().to_string(),
                body,
            })
            .collect();
        DigestBatch::new(messages)
    }
}

#[async_trait]
impl EventChannel for MemoryEventChannel {
    async fn publish(&self, body: String) -> Result<(), PublishError> {
        info!(queue = %self.queue_name, "publishing message");
        self.pending.lock().await.push_back(body);
        Ok(())
    }
}
