//! Notification topic port and in-memory adapter.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

/// The topic rejected or failed to accept the notification.
#[derive(Debug, Error)]
#[error("notification publish failed: {0}")]
pub struct NotifyError(pub String);

/// Fan-out publish target for digest summaries.
#[async_trait]
pub trait NotificationTopic: Send + Sync {
    /// Publish a plain-text message to the topic.
    async fn publish(&self, message: &str) -> Result<(), NotifyError>;
}

/// In-memory [`NotificationTopic`] recording every published message.
pub struct MemoryTopic {
    topic_name: String,
    published: Mutex<Vec<String>>,
}

impl MemoryTopic {
    /// Create a topic named by its identifier.
    pub fn new(topic_name: impl Into<String>) -> Self {
        Self {
            topic_name: topic_name.into(),
            published: Mutex::new(Vec::new()),
        }
    }

    /// Messages published so far, in order.
    pub async fn published(&self) -> Vec<String> {
        self.published.lock().await.clone()
    }
}

#[async_trait]
impl NotificationTopic for MemoryTopic {
    async fn publish(&self, message: &str) -> Result<(), NotifyError> {
        info!(topic = %self.topic_name, "publishing notification");
        self.published.lock().await.push(message.to_owned());
        Ok(())
    }
}
