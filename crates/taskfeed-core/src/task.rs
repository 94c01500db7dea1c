//! Task record and creation request types.

use crate::ids::{OwnerId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix applied to the owner identity to form the storage partition key.
pub const OWNER_KEY_PREFIX: &str = "user#";

/// Prefix applied to the task id to form the storage sort key.
pub const TASK_KEY_PREFIX: &str = "task#";

/// A Task is one durably recorded unit of work.
///
/// The `(owner, id)` pair is the storage key and is immutable once written.
/// `owner` and `id` carry the `user#`/`task#` key prefixes in their stored
/// form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Partition key: the creating principal, rendered `user#<owner>`.
    pub owner: String,

    /// Sort key: the task identifier, rendered `task#<uuid>`.
    pub id: String,

    /// Required task title.
    pub title: String,

    /// Optional free-text body. Serialized as `null` when absent, never
    /// omitted, so the stored shape stays stable.
    pub body: Option<String>,

    /// Optional due date string. Serialized as `null` when absent, never
    /// omitted.
    pub due_date: Option<String>,

    /// When the task was recorded, UTC. Assigned by the recorder at write
    /// time, never by the caller.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build the stored record for a freshly created task.
    pub fn new(
        owner: &OwnerId,
        id: &TaskId,
        request: &CreateTaskRequest,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            owner: format!("{OWNER_KEY_PREFIX}{owner}"),
            id: format!("{TASK_KEY_PREFIX}{id}"),
            title: request.title.clone(),
            body: request.body.clone(),
            due_date: request.due_date.clone(),
            created_at,
        }
    }

    /// The `(partition, sort)` storage key addressing this task.
    pub fn key(&self) -> (&str, &str) {
        (&self.owner, &self.id)
    }
}

/// Typed boundary input for task creation.
///
/// The transport layer (out of scope here) deserializes the request body into
/// this shape; malformed bodies never reach the recorder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Required task title.
    pub title: String,

    /// Optional free-text body.
    #[serde(default)]
    pub body: Option<String>,

    /// Optional due date, ISO-8601 or absent.
    #[serde(default)]
    pub due_date: Option<String>,
}

impl CreateTaskRequest {
    /// Create a request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            due_date: None,
        }
    }

    /// Builder method to set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builder method to set the due date.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}
