//! Runtime configuration
//!
//! Loaded from `config.json` in the working directory when present,
//! otherwise assembled from environment variables and defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default seconds between poller cycles.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Default timeout for the recovery lookup and generation requests.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default bound on the response cache.
const DEFAULT_CACHE_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API key for the generation backend.
    #[serde(default)]
    pub gemini_api_key: String,

    /// Endpoint queried by the recovery lookup.
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Maximum number of cached responses before LRU eviction.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Seconds between poller cycles.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Per-request timeout for generation and recovery HTTP calls.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Path of the single-slot signal file.
    #[serde(default = "default_signal_path")]
    pub signal_path: String,

    /// Path of the append-only event log.
    #[serde(default = "default_log_path")]
    pub log_path: String,
}

fn default_search_url() -> String {
    std::env::var("SEARCH_URL").unwrap_or_else(|_| "https://www.google.com/search".to_string())
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_signal_path() -> String {
    "communication.txt".to_string()
}

fn default_log_path() -> String {
    "event_log.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            search_url: default_search_url(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            signal_path: default_signal_path(),
            log_path: default_log_path(),
        }
    }
}

impl Config {
    /// Load `config.json` from the working directory, falling back to
    /// environment variables when the file is absent.
    pub fn load() -> Self {
        Self::load_from(Path::new("config.json"))
    }

    /// Load from a specific path; a missing file yields the env-based default.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
