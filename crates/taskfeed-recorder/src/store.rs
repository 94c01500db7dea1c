//! Durable task storage port and in-memory adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use taskfeed_core::Task;

/// Errors from the durable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Durable key-value storage for tasks.
///
/// `put` must be a single atomic insert-or-replace against the `(owner, id)`
/// key; partial writes are not representable.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Write `task` under its `(owner, id)` key, replacing any prior record.
    async fn put(&self, task: &Task) -> Result<(), StoreError>;

    /// Fetch the task stored under `(owner_key, task_key)`, if any.
    async fn get(&self, owner_key: &str, task_key: &str) -> Result<Option<Task>, StoreError>;
}

/// In-memory [`TaskStore`] keyed by `(owner, id)`.
pub struct MemoryTaskStore {
    table: String,
    tasks: RwLock<HashMap<(String, String), Task>>,
}

impl MemoryTaskStore {
    /// Create an empty store named by its table identifier.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored tasks.
    pub async fn task_count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn put(&self, task: &Task) -> Result<(), StoreError> {
        info!(table = %self.table, owner = %task.owner, task_id = %task.id, "writing task");
        let (owner, id) = task.key();
        self.tasks
            .write()
            .await
            .insert((owner.to_owned(), id.to_owned()), task.clone());
        Ok(())
    }

    async fn get(&self, owner_key: &str, task_key: &str) -> Result<Option<Task>, StoreError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .get(&(owner_key.to_owned(), task_key.to_owned()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskfeed_core::{CreateTaskRequest, OwnerId, TaskId};

    fn sample_task() -> Task {
        Task::new(
            &OwnerId::new("u1"),
            &TaskId::generate(),
            &CreateTaskRequest::new("t"),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryTaskStore::new("tasks");
        let task = sample_task();
        store.put(&task).await.unwrap();

        let fetched = store.get(&task.owner, &task.id).await.unwrap();
        assert_eq!(fetched, Some(task));
        assert_eq!(store.task_count().await, 1);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_key() {
        let store = MemoryTaskStore::new("tasks");
        let mut task = sample_task();
        store.put(&task).await.unwrap();

        task.title = "updated".into();
        store.put(&task).await.unwrap();

        let fetched = store.get(&task.owner, &task.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "updated");
        assert_eq!(store.task_count().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryTaskStore::new("tasks");
        let fetched = store.get("user#nobody", "task#none").await.unwrap();
        assert_eq!(fetched, None);
    }
}
