//! A single tradable tier of an enchantment book family.

use super::roman::to_roman;
use super::snapshot::ProductRecord;

/// Identifier suffix of the lowest tier that takes part in a pair.
const MIN_TIER_SUFFIX: &str = "_1";
/// Identifier suffix of the highest tier that takes part in a pair.
const MAX_TIER_SUFFIX: &str = "_5";

/// One bazaar product, identified as `<FAMILY>_<tier>`.
///
/// Prices and weekly counters start at zero and are filled once from the
/// product's order-book summary; a missing side keeps its zero default.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: String,
    buy_order_price: f64,
    sell_order_price: f64,
    instant_buy_price: f64,
    instant_sell_price: f64,
    weekly_instant_buys: u64,
    weekly_instant_sells: u64,
}

impl Item {
    /// Creates an item with all prices and counters at zero.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buy_order_price: 0.0,
            sell_order_price: 0.0,
            instant_buy_price: 0.0,
            instant_sell_price: 0.0,
            weekly_instant_buys: 0,
            weekly_instant_sells: 0,
        }
    }

    /// Creates an item populated from its bazaar record.
    ///
    /// The best sell offer is what a buy order has to beat and what an
    /// instant sell receives; the best buy order is the mirror image.
    #[must_use]
    pub fn from_product(id: impl Into<String>, record: &ProductRecord) -> Self {
        let mut item = Self::new(id);

        if let Some(level) = record.best_sell() {
            item.buy_order_price = level.price_per_unit;
            item.instant_sell_price = level.price_per_unit;
        }
        if let Some(level) = record.best_buy() {
            item.sell_order_price = level.price_per_unit;
            item.instant_buy_price = level.price_per_unit;
        }

        item.weekly_instant_buys = record.quick_status.buy_moving_week;
        item.weekly_instant_sells = record.quick_status.sell_moving_week;
        item
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Price a buy order is placed at.
    #[must_use]
    pub fn buy_order_price(&self) -> f64 {
        self.buy_order_price
    }

    /// Price a sell order is placed at.
    #[must_use]
    pub fn sell_order_price(&self) -> f64 {
        self.sell_order_price
    }

    #[must_use]
    pub fn instant_buy_price(&self) -> f64 {
        self.instant_buy_price
    }

    #[must_use]
    pub fn instant_sell_price(&self) -> f64 {
        self.instant_sell_price
    }

    #[must_use]
    pub fn weekly_instant_buys(&self) -> u64 {
        self.weekly_instant_buys
    }

    #[must_use]
    pub fn weekly_instant_sells(&self) -> u64 {
        self.weekly_instant_sells
    }

    #[must_use]
    pub fn is_min_tier(&self) -> bool {
        self.id.ends_with(MIN_TIER_SUFFIX)
    }

    #[must_use]
    pub fn is_max_tier(&self) -> bool {
        self.id.ends_with(MAX_TIER_SUFFIX)
    }

    /// Numeric tier suffix, if the identifier carries one.
    #[must_use]
    pub fn tier(&self) -> Option<u32> {
        self.id
            .rsplit_once('_')
            .and_then(|(_, tier)| tier.parse().ok())
    }

    /// Family key: the identifier without its trailing `_<tier>` segment.
    #[must_use]
    pub fn family(&self) -> &str {
        family_key(&self.id)
    }

    /// Human readable name, e.g. `ENCHANTMENT_ULTIMATE_WISE_5` becomes
    /// `Ultimate Wise V`.
    ///
    /// Identifiers without a numeric tier are returned unchanged.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.tier() {
            Some(tier) => {
                let mut name = family_display_name(self.family());
                let numeral = to_roman(tier);
                if !name.is_empty() && !numeral.is_empty() {
                    name.push(' ');
                }
                name.push_str(&numeral);
                name
            }
            None => self.id.clone(),
        }
    }
}

/// Strips the trailing `_<tier>` segment from a product identifier.
///
/// An identifier without any `_` is its own family.
#[must_use]
pub fn family_key(product_id: &str) -> &str {
    product_id
        .rsplit_once('_')
        .map_or(product_id, |(family, _)| family)
}

/// Title-cases a family key, dropping its leading category segment:
/// `ENCHANTMENT_ULTIMATE_WISE` becomes `Ultimate Wise`.
#[must_use]
pub fn family_display_name(family: &str) -> String {
    family
        .split('_')
        .skip(1)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
