//! Batch counting and summary publication.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use taskfeed_core::{DigestBatch, DigestNotification};

use crate::topic::{NotificationTopic, NotifyError};

/// Errors returned by [`DigestAggregator::handle_batch`].
#[derive(Debug, Error)]
pub enum DigestError {
    /// The channel delivered an empty batch, which its contract forbids.
    #[error("empty batch delivered")]
    EmptyBatch,

    /// The summary publish failed; the batch counts as unprocessed and the
    /// channel's redelivery policy governs recovery.
    #[error("digest publish failed: {0}")]
    Notify(#[from] NotifyError),
}

/// Turns one delivered batch of task-created events into one summary
/// notification.
///
/// Only the batch size is read; event payloads are intentionally not
/// deserialized or included in the summary.
pub struct DigestAggregator<T> {
    topic: Arc<T>,
}

impl<T: NotificationTopic> DigestAggregator<T> {
    /// Create an aggregator over the given topic handle.
    pub fn new(topic: Arc<T>) -> Self {
        Self { topic }
    }

    /// Count the batch and publish the digest summary.
    ///
    /// All-or-nothing: no message in the batch is individually acknowledged,
    /// and a publish failure reports the whole batch unprocessed. Returns
    /// the composed notification for observability.
    pub async fn handle_batch(&self, batch: &DigestBatch) -> Result<DigestNotification, DigestError> {
        if batch.is_empty() {
            return Err(DigestError::EmptyBatch);
        }

        let notification = DigestNotification::for_count(batch.len());
        info!(task_count = notification.task_count, "publishing digest");
        self.topic.publish(&notification.message).await?;

        Ok(notification)
    }
}
