//! The event published on the channel after a successful task write.

use crate::ids::TaskId;
use crate::task::CreateTaskRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message body published after a task is durably written.
///
/// A derived, at-least-once-delivered copy of the task's notifiable fields;
/// the durable store remains the system of record. `id` is the raw uuid text
/// without the `task#` storage prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreatedEvent {
    /// Raw task id.
    pub id: String,

    /// Task title.
    pub title: String,

    /// Optional body, `null` when absent.
    pub body: Option<String>,

    /// Optional due date, `null` when absent.
    pub due_date: Option<String>,

    /// When the task was recorded.
    pub created_at: DateTime<Utc>,
}

impl TaskCreatedEvent {
    /// Build the event for a task written from `request` at `created_at`.
    pub fn new(id: &TaskId, request: &CreateTaskRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.as_str().to_owned(),
            title: request.title.clone(),
            body: request.body.clone(),
            due_date: request.due_date.clone(),
            created_at,
        }
    }
}
