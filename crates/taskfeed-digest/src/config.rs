//! Aggregator configuration, resolved once at process start.

/// Aggregator configuration.
pub struct Config {
    /// Notification topic address for digest summaries.
    pub notification_topic: String,
}

impl Config {
    /// Resolve configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            notification_topic: std::env::var("NOTIFICATION_TOPIC")
                .unwrap_or(defaults.notification_topic),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notification_topic: "task-digest".to_string(),
        }
    }
}
