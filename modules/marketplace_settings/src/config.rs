//! Configuration for the marketplace settings module

use serde::Deserialize;
use std::time::Duration;

/// Settings store configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Local-cache key under which the record is stored
    #[serde(default = "default_cache_key")]
    pub cache_key: String,

    /// Timeout for each remote step of a load or update
    #[serde(with = "humantime_serde", default = "default_remote_timeout")]
    pub remote_timeout: Duration,

    /// Capacity of the subscriber broadcast channel
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_key: default_cache_key(),
            remote_timeout: default_remote_timeout(),
            event_capacity: default_event_capacity(),
        }
    }
}

fn default_cache_key() -> String {
    crate::contract::SETTINGS_CACHE_KEY.to_string()
}

fn default_remote_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_event_capacity() -> usize {
    16
}
