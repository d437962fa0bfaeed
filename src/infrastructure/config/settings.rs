//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to defaults. `BAZAAR_API_URL` overrides the configured API root.
//!
//! # Example
//!
//! ```no_run
//! use bookflip::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::logging::LoggingConfig;
use super::ranking::RankingConfig;
use crate::adapter::outbound::bazaar::settings::BazaarConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding `bazaar.api_url`.
pub const API_URL_ENV: &str = "BAZAAR_API_URL";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bazaar: BazaarConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when given, otherwise start from defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.bazaar.api_url = url;
            }
        }
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.bazaar.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "bazaar.api_url",
            }
            .into());
        }
        url::Url::parse(&self.bazaar.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "bazaar.api_url",
            reason: e.to_string(),
        })?;

        if self.bazaar.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "bazaar.timeout_ms",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if self.bazaar.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "bazaar.connect_timeout_ms",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if self.bazaar.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "bazaar.retry_max_attempts",
                reason: "must be at least 1".into(),
            }
            .into());
        }

        if self.ranking.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ranking.page_size",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if !self.ranking.min_score.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "ranking.min_score",
                reason: "must be a finite number".into(),
            }
            .into());
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected 'pretty' or 'json', got '{other}'"),
                }
                .into())
            }
        }

        Ok(())
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
