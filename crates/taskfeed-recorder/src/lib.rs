//! Task Recorder
//!
//! Accepts an already-authenticated task-creation request, assigns identity
//! and a UTC timestamp, persists the task, and publishes a corresponding
//! event onto the outbound channel. The store write and the channel publish
//! are two independent systems: the write always completes before a publish
//! is attempted, and a publish failure never rolls the write back.

pub mod channel;
pub mod config;
pub mod recorder;
pub mod store;

pub use channel::{EventChannel, MemoryEventChannel, PublishError};
pub use config::Config;
pub use recorder::{RecorderError, TaskRecorder};
pub use store::{MemoryTaskStore, StoreError, TaskStore};
