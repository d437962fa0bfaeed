//! Combinable pairs and the profitability heuristic.
//!
//! A pair holds the lowest and highest tier of one book family. The trade it
//! models is: place a buy order for [`BULK_QUANTITY`] low-tier books, combine
//! them into one high-tier book, then place a sell order for that book.
//!
//! # Scoring
//!
//! ```text
//! difference        = |high.weekly_instant_buys * 1.87 - low.weekly_instant_sells * 0.9|
//! margin_importance = margin^1.15 / 1_000_000
//! score             = (1 / difference + (high.buys / 5000) * (low.sells / 2000)) * margin_importance
//! ```
//!
//! The weights are empirical. Degenerate inputs never fail: they evaluate to
//! a [`ScoreOutcome`] other than [`ScoreOutcome::Scored`] and score as `0.0`.

use tracing::debug;

use super::item::Item;

/// Number of low-tier books combined into one high-tier book.
pub const BULK_QUANTITY: f64 = 16.0;

const HIGH_BUY_WEIGHT: f64 = 1.87;
const LOW_SELL_WEIGHT: f64 = 0.9;
// Integer form of the weight ratio 1.87 : 0.9.
const HIGH_BUY_RATIO: u64 = 187;
const LOW_SELL_RATIO: u64 = 90;
const MARGIN_EXPONENT: f64 = 1.15;
const MARGIN_SCALE: f64 = 1_000_000.0;
const HIGH_BUY_VOLUME_SCALE: f64 = 5_000.0;
const LOW_SELL_VOLUME_SCALE: f64 = 2_000.0;

/// Result of evaluating the scoring formula for a pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreOutcome {
    /// Finite score from the full formula.
    Scored(f64),
    /// Nobody instantly sold the low tier or instantly bought the high tier
    /// last week (or a tier is missing).
    Illiquid,
    /// The margin is negative; a fractional power of it is not real.
    NegativeMargin { margin: f64 },
    /// Weighted weekly volumes cancel exactly, so `1 / difference` diverges.
    BalancedVolume,
    /// The formula produced NaN or infinity for any other reason.
    NonFinite,
}

impl ScoreOutcome {
    /// Numeric score used for ranking. Every degenerate outcome is `0.0`.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Scored(score) => score,
            _ => 0.0,
        }
    }

    /// True for outcomes that indicate suspicious market data rather than a
    /// legitimately quiet pair.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        matches!(
            self,
            Self::NegativeMargin { .. } | Self::BalancedVolume | Self::NonFinite
        )
    }
}

/// Lowest and highest tier of one book family.
///
/// Either slot may still be empty; an empty slot reads as an item whose
/// prices and weekly counters are all zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pair {
    low_tier: Option<Item>,
    high_tier: Option<Item>,
}

impl Pair {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `item` into the low or high slot by its tier.
    ///
    /// Items of intermediate tiers are dropped. Returns whether the item was
    /// kept.
    pub fn insert(&mut self, item: Item) -> bool {
        if item.is_min_tier() {
            self.low_tier = Some(item);
        } else if item.is_max_tier() {
            self.high_tier = Some(item);
        } else {
            return false;
        }
        true
    }

    #[must_use]
    pub fn low_tier(&self) -> Option<&Item> {
        self.low_tier.as_ref()
    }

    #[must_use]
    pub fn high_tier(&self) -> Option<&Item> {
        self.high_tier.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.low_tier.is_some() && self.high_tier.is_some()
    }

    /// Cost of the bulk buy order for the low tier.
    #[must_use]
    pub fn bulk_cost(&self) -> f64 {
        self.low_tier
            .as_ref()
            .map_or(0.0, Item::buy_order_price)
            * BULK_QUANTITY
    }

    /// Expected profit of selling one high-tier book against buying
    /// [`BULK_QUANTITY`] low-tier books.
    #[must_use]
    pub fn margin(&self) -> f64 {
        let sell = self.high_tier.as_ref().map_or(0.0, Item::sell_order_price);
        sell - self.bulk_cost()
    }

    /// Evaluates the scoring formula from the current item values.
    #[must_use]
    pub fn evaluate(&self) -> ScoreOutcome {
        let low_sells = self
            .low_tier
            .as_ref()
            .map_or(0, Item::weekly_instant_sells);
        let high_buys = self
            .high_tier
            .as_ref()
            .map_or(0, Item::weekly_instant_buys);

        if low_sells == 0 || high_buys == 0 {
            return ScoreOutcome::Illiquid;
        }

        let margin = self.margin();
        if margin < 0.0 {
            return ScoreOutcome::NegativeMargin { margin };
        }

        if volumes_balance(high_buys, low_sells) {
            return ScoreOutcome::BalancedVolume;
        }

        let low_sells = low_sells as f64;
        let high_buys = high_buys as f64;
        let difference = (high_buys * HIGH_BUY_WEIGHT - low_sells * LOW_SELL_WEIGHT).abs();

        let margin_importance = margin.powf(MARGIN_EXPONENT) / MARGIN_SCALE;
        let liquidity = (high_buys / HIGH_BUY_VOLUME_SCALE) * (low_sells / LOW_SELL_VOLUME_SCALE);
        let score = (1.0 / difference + liquidity) * margin_importance;

        if score.is_finite() {
            ScoreOutcome::Scored(score)
        } else {
            ScoreOutcome::NonFinite
        }
    }

    /// Ranking score. Recomputed on every call.
    #[must_use]
    pub fn score(&self) -> f64 {
        let outcome = self.evaluate();
        if outcome.is_degenerate() {
            debug!(
                low = self.low_tier.as_ref().map(Item::id),
                high = self.high_tier.as_ref().map(Item::id),
                ?outcome,
                "Degenerate pair scored as zero"
            );
        }
        outcome.value()
    }
}

/// Whether the weighted weekly volumes cancel exactly.
///
/// Decided on the integer counters: the float difference of two equal
/// weighted volumes can round to a tiny non-zero residue.
fn volumes_balance(high_buys: u64, low_sells: u64) -> bool {
    match (
        high_buys.checked_mul(HIGH_BUY_RATIO),
        low_sells.checked_mul(LOW_SELL_RATIO),
    ) {
        (Some(high), Some(low)) => high == low,
        _ => {
            let high = high_buys as f64 * HIGH_BUY_WEIGHT;
            let low = low_sells as f64 * LOW_SELL_WEIGHT;
            (high - low).abs() <= high.max(low) * f64::EPSILON * 4.0
        }
    }
}
