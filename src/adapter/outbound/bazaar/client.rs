//! Bazaar REST client.
//!
//! Fetches the full bazaar snapshot in one GET. Transport problems are
//! classified into [`FetchError`] variants so callers can tell an outage
//! apart from an upstream `success: false` response.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::settings::BazaarConfig;
use crate::domain::snapshot::Snapshot;
use crate::error::{FetchError, Result};
use crate::port::SnapshotSource;

/// HTTP client for the bazaar endpoint.
pub struct BazaarClient {
    http: HttpClient,
    url: String,
    timeout_ms: u64,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl BazaarClient {
    #[must_use]
    pub fn from_config(config: &BazaarConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(concat!("bookflip/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            url: config.snapshot_url(),
            timeout_ms: config.timeout_ms,
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    /// Snapshot URL this client requests.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_with_retry(&self) -> std::result::Result<Snapshot, FetchError> {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            match self.get_once().await {
                Ok(snapshot) => return Ok(snapshot),
                Err(err) if attempt < max_attempts && Self::should_retry(&err) => {
                    warn!(
                        attempt,
                        max_attempts,
                        error = %err,
                        "Snapshot request failed, retrying"
                    );
                    if self.retry_backoff_ms > 0 {
                        sleep(Duration::from_millis(self.retry_backoff_ms)).await;
                    }
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn get_once(&self) -> std::result::Result<Snapshot, FetchError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|err| self.classify(err))?;
        debug!(bytes = body.len(), "Snapshot body received");

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: self.url.clone(),
            source,
        })
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: self.url.clone(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            FetchError::Transport {
                url: self.url.clone(),
                source: err,
            }
        }
    }

    fn should_retry(err: &FetchError) -> bool {
        match err {
            FetchError::Timeout { .. } => true,
            FetchError::Transport { source, .. } => source.is_connect(),
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::Decode { .. } => false,
        }
    }
}

#[async_trait]
impl SnapshotSource for BazaarClient {
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        info!(url = %self.url, "Fetching bazaar snapshot");
        let snapshot = self.get_with_retry().await?;
        debug!(
            success = snapshot.success,
            products = snapshot.products.len(),
            "Fetched bazaar snapshot"
        );
        Ok(snapshot)
    }

    fn source_name(&self) -> &'static str {
        "bazaar"
    }
}
