//! Handlers for the `check` command group.

use std::process::ExitCode;
use std::time::Instant;

use super::output;
use crate::adapter::outbound::bazaar::BazaarClient;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::SnapshotSource;

/// Print the resolved configuration. Loading already validated it.
pub fn config(config: &Config) -> ExitCode {
    output::section("Configuration");
    output::field("API URL", &config.bazaar.api_url);
    output::field("Timeout", format!("{}ms", config.bazaar.timeout_ms));
    output::field("Connect timeout", format!("{}ms", config.bazaar.connect_timeout_ms));
    output::field("Retry attempts", config.bazaar.retry_max_attempts);
    output::field("Category prefix", &config.ranking.category_prefix);
    output::field("Page size", config.ranking.page_size);
    output::field("Min score", config.ranking.min_score);
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);
    output::success("Configuration is valid");
    ExitCode::SUCCESS
}

/// Fetch one snapshot and summarise it.
pub async fn connection(config: &Config) -> Result<ExitCode> {
    let client = BazaarClient::from_config(&config.bazaar);
    output::section("Bazaar connection");
    output::field("URL", client.url());

    let started = Instant::now();
    let snapshot = client.fetch_snapshot().await?;
    let books = snapshot
        .products
        .keys()
        .filter(|id| id.starts_with(&config.ranking.category_prefix))
        .count();

    output::field("Elapsed", format!("{}ms", started.elapsed().as_millis()));
    output::field("Success flag", snapshot.success);
    output::field("Products", snapshot.products.len());
    output::field("Books", books);

    if snapshot.success {
        output::success("Snapshot received");
        Ok(ExitCode::SUCCESS)
    } else {
        output::warning("Upstream reported failure");
        Ok(ExitCode::from(2))
    }
}
