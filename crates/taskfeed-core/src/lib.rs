//! Taskfeed Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/queue clients
//! - Database
//! - Runtime specifics
//!
//! All types here represent the core business domain of Taskfeed.

pub mod digest;
pub mod event;
pub mod ids;
pub mod task;

// Re-export commonly used types
pub use digest::{DeliveredMessage, DigestBatch, DigestNotification};
pub use event::TaskCreatedEvent;
pub use ids::{OwnerId, TaskId};
pub use task::{CreateTaskRequest, Task, OWNER_KEY_PREFIX, TASK_KEY_PREFIX};
