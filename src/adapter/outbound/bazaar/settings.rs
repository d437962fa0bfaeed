//! Bazaar endpoint configuration.

use serde::Deserialize;

/// Public SkyBlock API root.
pub const DEFAULT_API_URL: &str = "https://api.hypixel.net/v2/skyblock";

/// Bazaar HTTP settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BazaarConfig {
    /// API root; the snapshot is served at `<api_url>/bazaar`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connection establishment timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Attempts per fetch, including the first. Timeouts, connect failures
    /// and HTTP 5xx responses are retried; other statuses fail at once.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Delay between attempts in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

const fn default_retry_max_attempts() -> u32 {
    1
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

impl BazaarConfig {
    /// Full snapshot URL.
    #[must_use]
    pub fn snapshot_url(&self) -> String {
        format!("{}/bazaar", self.api_url.trim_end_matches('/'))
    }
}

impl Default for BazaarConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}
