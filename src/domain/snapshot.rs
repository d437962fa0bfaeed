//! Bazaar snapshot document.
//!
//! These types mirror the JSON served by the bazaar endpoint. Every nested
//! field defaults when absent so a partially populated product still parses;
//! only the top-level `success` flag is required.
//!
//! # Example
//!
//! ```
//! use bookflip::domain::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::from_json(r#"{
//!     "success": true,
//!     "products": {
//!         "ENCHANTMENT_SHARPNESS_1": {
//!             "sell_summary": [{ "pricePerUnit": 12.5, "amount": 64, "orders": 2 }],
//!             "buy_summary": [],
//!             "quick_status": { "buyMovingWeek": 10, "sellMovingWeek": 20 }
//!         }
//!     }
//! }"#).unwrap();
//!
//! assert!(snapshot.success);
//! assert_eq!(snapshot.products.len(), 1);
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Result;

/// One point-in-time pull of the bazaar order-book summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    /// Upstream success indicator. `false` means the snapshot carries no
    /// usable data.
    pub success: bool,
    /// Upstream capture time in epoch milliseconds.
    #[serde(default, rename = "lastUpdated")]
    pub last_updated: Option<i64>,
    /// Products keyed by product identifier, iterated in key order.
    #[serde(default)]
    pub products: BTreeMap<String, ProductRecord>,
}

impl Snapshot {
    /// Parses a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a snapshot from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Capture time as a UTC timestamp, when the upstream provided one.
    #[must_use]
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated.and_then(DateTime::from_timestamp_millis)
    }
}

/// Order-book summary for a single product.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRecord {
    /// Resting sell offers, best (lowest) first.
    #[serde(default)]
    pub sell_summary: Vec<OrderLevel>,
    /// Resting buy orders, best (highest) first.
    #[serde(default)]
    pub buy_summary: Vec<OrderLevel>,
    #[serde(default)]
    pub quick_status: WeeklyStatus,
}

impl ProductRecord {
    /// Best entry of the sell-side summary.
    #[must_use]
    pub fn best_sell(&self) -> Option<&OrderLevel> {
        self.sell_summary.first()
    }

    /// Best entry of the buy-side summary.
    #[must_use]
    pub fn best_buy(&self) -> Option<&OrderLevel> {
        self.buy_summary.first()
    }
}

/// A single aggregated price level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct OrderLevel {
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: f64,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub orders: u64,
}

/// Trailing-week trade counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct WeeklyStatus {
    /// Units bought instantly over the last week.
    #[serde(default, rename = "buyMovingWeek")]
    pub buy_moving_week: u64,
    /// Units sold instantly over the last week.
    #[serde(default, rename = "sellMovingWeek")]
    pub sell_moving_week: u64,
}
