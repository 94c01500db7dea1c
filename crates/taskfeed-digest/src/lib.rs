//! Digest Aggregator
//!
//! Invoked once per delivered batch of task-created events. It counts the
//! batch and publishes a single summary notification; message payloads are
//! never inspected. Processing is all-or-nothing per batch: a failed publish
//! leaves the whole batch unprocessed for the channel to redeliver.

pub mod aggregator;
pub mod config;
pub mod topic;

pub use aggregator::{DigestAggregator, DigestError};
pub use config::Config;
pub use topic::{MemoryTopic, NotificationTopic, NotifyError};
