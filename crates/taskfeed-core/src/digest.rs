//! Digest batch and notification types.

use serde::{Deserialize, Serialize};

/// One message as delivered by the channel: an opaque receipt plus the raw
/// JSON event body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveredMessage {
    /// Delivery receipt handle, minted by the channel per delivery.
    pub receipt: String,

    /// The serialized event body as published.
    pub body: String,
}

/// A group of messages delivered together for one aggregator invocation.
///
/// Ephemeral: it has no persisted identity, only its members. Batch size is
/// governed by the channel's own batching policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DigestBatch {
    messages: Vec<DeliveredMessage>,
}

impl DigestBatch {
    /// Create a batch from delivered messages.
    pub fn new(messages: Vec<DeliveredMessage>) -> Self {
        Self { messages }
    }

    /// Number of messages in the batch.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the batch carries no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The delivered messages.
    pub fn messages(&self) -> &[DeliveredMessage] {
        &self.messages
    }
}

/// The outbound digest summary: a fixed-template message and the batch count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestNotification {
    /// Human-readable summary text.
    pub message: String,

    /// Number of tasks in the batch the summary describes.
    pub task_count: usize,
}

impl DigestNotification {
    /// Compose the summary for a batch of `count` new tasks.
    pub fn for_count(count: usize) -> Self {
        Self {
            message: format!("Good morning, you now have {count} new tasks!"),
            task_count: count,
        }
    }
}
