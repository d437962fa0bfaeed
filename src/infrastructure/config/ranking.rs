//! Ranking configuration.

use serde::Deserialize;

use crate::domain::ranking::{RankingOptions, DEFAULT_CATEGORY_PREFIX, DEFAULT_PAGE_SIZE};

/// Ranking and paging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Product identifier prefix selecting the ranked category.
    #[serde(default = "default_category_prefix")]
    pub category_prefix: String,
    /// Entries per rendered page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Families scoring below this are hidden.
    #[serde(default)]
    pub min_score: f64,
}

fn default_category_prefix() -> String {
    DEFAULT_CATEGORY_PREFIX.into()
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl RankingConfig {
    /// Engine options derived from this configuration.
    #[must_use]
    pub fn options(&self) -> RankingOptions {
        RankingOptions {
            category_prefix: self.category_prefix.clone(),
            min_score: self.min_score,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            category_prefix: default_category_prefix(),
            page_size: default_page_size(),
            min_score: 0.0,
        }
    }
}
