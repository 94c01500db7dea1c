//! Recorder configuration, resolved once at process start.

/// Recorder configuration.
pub struct Config {
    /// Durable-store table identifier.
    pub tasks_table: String,

    /// Outbound channel address for task-created events.
    pub new_tasks_queue: String,
}

impl Config {
    /// Resolve configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tasks_table: std::env::var("TASKS_TABLE").unwrap_or(defaults.tasks_table),
            new_tasks_queue: std::env::var("NEW_TASKS_QUEUE").unwrap_or(defaults.new_tasks_queue),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_table: "tasks".to_string(),
            new_tasks_queue: "new-tasks".to_string(),
        }
    }
}
