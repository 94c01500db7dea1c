//! The write-then-publish recorder service.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use taskfeed_core::{CreateTaskRequest, OwnerId, Task, TaskCreatedEvent, TaskId};

use crate::channel::{EventChannel, PublishError};
use crate::store::{StoreError, TaskStore};

/// Errors returned by [`TaskRecorder::create_task`].
#[derive(Debug, Error)]
pub enum RecorderError {
    /// A required field was missing or empty. No side effect occurred.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The durable write failed. No event was published; the whole
    /// operation is safe to retry (a retry creates a new task id).
    #[error("task write failed: {0}")]
    Storage(#[from] StoreError),

    /// The write succeeded but the channel publish failed. The task is
    /// durably recorded; the downstream digest may never see it.
    #[error("event publish failed: {0}")]
    Publish(#[from] PublishError),
}

/// Records tasks durably and publishes a creation event per write.
///
/// Stateless per invocation apart from the created-at watermark, which keeps
/// `created_at` monotonically non-decreasing within this instance. Clients
/// are shared process-wide handles; many `create_task` calls may run
/// concurrently.
pub struct TaskRecorder<S, C> {
    store: Arc<S>,
    channel: Arc<C>,
    last_created_at: Mutex<DateTime<Utc>>,
}

impl<S: TaskStore, C: EventChannel> TaskRecorder<S, C> {
    /// Create a recorder over the given store and channel handles.
    pub fn new(store: Arc<S>, channel: Arc<C>) -> Self {
        Self {
            store,
            channel,
            last_created_at: Mutex::new(DateTime::<Utc>::MIN_UTC),
        }
    }

    /// Record one task and publish its creation event.
    ///
    /// The store write completes before the publish is attempted. A publish
    /// failure is surfaced as [`RecorderError::Publish`] with the task
    /// already persisted; there is no rollback and no outbox.
    pub async fn create_task(
        &self,
        owner: &OwnerId,
        request: CreateTaskRequest,
    ) -> Result<Task, RecorderError> {
        if owner.as_str().trim().is_empty() {
            return Err(RecorderError::InvalidRequest(
                "owner identity is required".to_string(),
            ));
        }
        if request.title.trim().is_empty() {
            return Err(RecorderError::InvalidRequest(
                "title is required".to_string(),
            ));
        }

        let id = TaskId::generate();
        let created_at = self.next_created_at();
        let task = Task::new(owner, &id, &request, created_at);

        info!(task_id = %id, owner = %owner, "recording task");
        self.store.put(&task).await?;

        let event = TaskCreatedEvent::new(&id, &request, created_at);
        let body = serde_json::to_string(&event).map_err(PublishError::from)?;

        if let Err(e) = self.channel.publish(body).await {
            warn!(task_id = %id, error = %e, "task persisted but event publish failed");
            return Err(e.into());
        }

        Ok(task)
    }

    // Clamp against the last issued timestamp so created_at never decreases
    // within this recorder instance, even if the wall clock steps back.
    fn next_created_at(&self) -> DateTime<Utc> {
        let now = Utc::now();
        let mut last = self
            .last_created_at
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let stamped = now.max(*last);
        *last = stamped;
        stamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MemoryEventChannel;
    use crate::store::MemoryTaskStore;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl TaskStore for FailingStore {
        async fn put(&self, _task: &Task) -> Result<(), StoreError> {
            Err(StoreError::Backend("injected".to_string()))
        }

        async fn get(&self, _owner_key: &str, _task_key: &str) -> Result<Option<Task>, StoreError> {
            Ok(None)
        }
    }

    struct FailingChannel;

    #[async_trait]
    impl EventChannel for FailingChannel {
        async fn publish(&self, _body: String) -> Result<(), PublishError> {
            Err(PublishError::Channel("injected".to_string()))
        }
    }

    fn recorder_with_memory() -> (
        TaskRecorder<MemoryTaskStore, MemoryEventChannel>,
        Arc<MemoryTaskStore>,
        Arc<MemoryEventChannel>,
    ) {
        let store = Arc::new(MemoryTaskStore::new("tasks"));
        let channel = Arc::new(MemoryEventChannel::new("new-tasks"));
        let recorder = TaskRecorder::new(store.clone(), channel.clone());
        (recorder, store, channel)
    }

    #[tokio::test]
    async fn test_create_task_persists_and_publishes() {
        let (recorder, store, channel) = recorder_with_memory();
        let before = Utc::now();

        let task = recorder
            .create_task(&OwnerId::new("u1"), CreateTaskRequest::new("Buy milk"))
            .await
            .unwrap();

        assert_eq!(task.owner, "user#u1");
        assert!(task.id.starts_with("task#"));
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.body, None);
        assert_eq!(task.due_date, None);
        assert!(task.created_at >= before);

        let stored = store.get(&task.owner, &task.id).await.unwrap();
        assert_eq!(stored, Some(task.clone()));

        let batch = channel.take_batch(10).await;
        assert_eq!(batch.len(), 1);
        let event: TaskCreatedEvent = serde_json::from_str(&batch.messages()[0].body).unwrap();
        assert_eq!(format!("task#{}", event.id), task.id);
        assert_eq!(event.title, task.title);
        assert_eq!(event.due_date, None);
        assert_eq!(event.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_calls() {
        let (recorder, _, _) = recorder_with_memory();
        let owner = OwnerId::new("u1");

        let a = recorder
            .create_task(&owner, CreateTaskRequest::new("a"))
            .await
            .unwrap();
        let b = recorder
            .create_task(&owner, CreateTaskRequest::new("b"))
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_created_at_never_decreases() {
        let (recorder, _, _) = recorder_with_memory();
        let owner = OwnerId::new("u1");

        let mut previous = DateTime::<Utc>::MIN_UTC;
        for i in 0..20 {
            let task = recorder
                .create_task(&owner, CreateTaskRequest::new(format!("t{i}")))
                .await
                .unwrap();
            assert!(task.created_at >= previous);
            previous = task.created_at;
        }
    }

    #[tokio::test]
    async fn test_empty_title_has_no_side_effects() {
        let (recorder, store, channel) = recorder_with_memory();

        let err = recorder
            .create_task(&OwnerId::new("u1"), CreateTaskRequest::new(""))
            .await
            .unwrap_err();

        assert!(matches!(err, RecorderError::InvalidRequest(_)));
        assert_eq!(store.task_count().await, 0);
        assert_eq!(channel.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_empty_owner_is_rejected() {
        let (recorder, store, _) = recorder_with_memory();

        let err = recorder
            .create_task(&OwnerId::new(""), CreateTaskRequest::new("t"))
            .await
            .unwrap_err();

        assert!(matches!(err, RecorderError::InvalidRequest(_)));
        assert_eq!(store.task_count().await, 0);
    }

    #[tokio::test]
    async fn test_store_failure_publishes_nothing() {
        let channel = Arc::new(MemoryEventChannel::new("new-tasks"));
        let recorder = TaskRecorder::new(Arc::new(FailingStore), channel.clone());

        let err = recorder
            .create_task(&OwnerId::new("u1"), CreateTaskRequest::new("t"))
            .await
            .unwrap_err();

        assert!(matches!(err, RecorderError::Storage(_)));
        assert_eq!(channel.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_publish_failure_leaves_task_persisted() {
        let store = Arc::new(MemoryTaskStore::new("tasks"));
        let recorder = TaskRecorder::new(store.clone(), Arc::new(FailingChannel));

        let err = recorder
            .create_task(&OwnerId::new("u1"), CreateTaskRequest::new("t"))
            .await
            .unwrap_err();

        assert!(matches!(err, RecorderError::Publish(_)));
        assert_eq!(store.task_count().await, 1);
    }

    #[tokio::test]
    async fn test_optional_fields_flow_through() {
        let (recorder, _, channel) = recorder_with_memory();

        let task = recorder
            .create_task(
                &OwnerId::new("u1"),
                CreateTaskRequest::new("t")
                    .with_body("details")
                    .with_due_date("2026-09-01T00:00:00Z"),
            )
            .await
            .unwrap();

        assert_eq!(task.body.as_deref(), Some("details"));
        assert_eq!(task.due_date.as_deref(), Some("2026-09-01T00:00:00Z"));

        let batch = channel.take_batch(1).await;
        let event: TaskCreatedEvent = serde_json::from_str(&batch.messages()[0].body).unwrap();
        assert_eq!(event.body.as_deref(), Some("details"));
        assert_eq!(event.due_date.as_deref(), Some("2026-09-01T00:00:00Z"));
    }
}
