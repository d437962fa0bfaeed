//! Ranking engine: snapshot in, ordered pairs out.
//!
//! [`Ranking::build`] groups enchantment-book products into families, keeps
//! the lowest and highest tier of each family as a [`Pair`], and orders the
//! families by descending [`Pair::score`]. The result is immutable; pages for
//! presentation are borrowed views produced by [`Ranking::chunks`].
//!
//! # Example
//!
//! ```
//! use bookflip::domain::ranking::{Ranking, RankingOptions};
//! use bookflip::domain::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::from_json(r#"{ "success": false }"#).unwrap();
//! let ranking = Ranking::build(&snapshot, &RankingOptions::default());
//! assert!(ranking.is_empty());
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::item::{family_display_name, family_key, Item};
use super::pair::{Pair, ScoreOutcome};
use super::snapshot::Snapshot;

/// Product identifier prefix of enchantment books.
pub const DEFAULT_CATEGORY_PREFIX: &str = "ENCHANTMENT";

/// Entries per page when the caller does not choose.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Knobs for [`Ranking::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOptions {
    /// Only products whose identifier starts with this prefix are ranked.
    pub category_prefix: String,
    /// Families scoring below this are left out. The default keeps all.
    pub min_score: f64,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            category_prefix: DEFAULT_CATEGORY_PREFIX.into(),
            min_score: 0.0,
        }
    }
}

/// One ranked family.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPair {
    family: String,
    pair: Pair,
    score: f64,
}

impl RankedPair {
    /// Family key, e.g. `ENCHANTMENT_ULTIMATE_WISE`.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Title-cased family name, e.g. `Ultimate Wise`.
    #[must_use]
    pub fn display_name(&self) -> String {
        family_display_name(&self.family)
    }

    #[must_use]
    pub fn pair(&self) -> &Pair {
        &self.pair
    }

    /// Score the entry was ranked by.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Families ordered by descending score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<RankedPair>,
    captured_at: Option<DateTime<Utc>>,
    filtered: usize,
}

impl Ranking {
    /// Builds a ranking from one snapshot.
    ///
    /// A snapshot whose `success` flag is false yields an empty ranking
    /// rather than an error; callers check [`Ranking::is_empty`].
    #[must_use]
    pub fn build(snapshot: &Snapshot, options: &RankingOptions) -> Self {
        if !snapshot.success {
            warn!("Snapshot reported failure, ranking is empty");
            return Self::default();
        }

        let mut families: BTreeMap<&str, Pair> = BTreeMap::new();
        let mut considered = 0usize;
        let mut dropped = 0usize;

        for (product_id, record) in &snapshot.products {
            if !product_id.starts_with(&options.category_prefix) {
                continue;
            }
            considered += 1;

            let pair = families.entry(family_key(product_id)).or_default();
            if !pair.insert(Item::from_product(product_id.as_str(), record)) {
                dropped += 1;
            }
        }

        let incomplete = families.values().filter(|pair| !pair.is_complete()).count();
        let mut degenerate = 0usize;
        let mut filtered = 0usize;
        let mut entries: Vec<RankedPair> = families
            .into_iter()
            .map(|(family, pair)| {
                let outcome = pair.evaluate();
                if outcome.is_degenerate() {
                    degenerate += 1;
                    debug!(family, ?outcome, "Degenerate score, ranked as zero");
                }
                RankedPair {
                    family: family.to_string(),
                    score: outcome.value(),
                    pair,
                }
            })
            .filter(|entry| {
                let keep = entry.score >= options.min_score;
                if !keep {
                    filtered += 1;
                }
                keep
            })
            .collect();

        // Stable: equal scores keep family-key order.
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        if degenerate > 0 {
            warn!(degenerate, "Some pairs had degenerate market data");
        }
        debug!(
            products = snapshot.products.len(),
            considered,
            dropped_tiers = dropped,
            incomplete,
            filtered,
            ranked = entries.len(),
            "Ranking built"
        );

        Self {
            entries,
            captured_at: snapshot.captured_at(),
            filtered,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedPair> {
        self.entries.iter()
    }

    /// Entry at a 1-based rank.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&RankedPair> {
        rank.checked_sub(1).and_then(|index| self.entries.get(index))
    }

    /// Upstream capture time of the snapshot this ranking came from.
    #[must_use]
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.captured_at
    }

    /// Families left out for scoring below [`RankingOptions::min_score`].
    #[must_use]
    pub fn filtered(&self) -> usize {
        self.filtered
    }

    /// Splits the ranking into consecutive pages of up to `size` entries.
    ///
    /// The last page may be shorter. A size of zero is treated as one.
    pub fn chunks(&self, size: usize) -> impl Iterator<Item = Page<'_>> {
        let size = size.max(1);
        self.entries
            .chunks(size)
            .enumerate()
            .map(move |(index, entries)| Page {
                number: index + 1,
                first_rank: index * size + 1,
                entries,
            })
    }

    /// Number of pages [`Ranking::chunks`] yields for `size`.
    #[must_use]
    pub fn page_count(&self, size: usize) -> usize {
        self.entries.len().div_ceil(size.max(1))
    }

    /// Counts entries per scoring outcome class, for diagnostics.
    #[must_use]
    pub fn outcome_counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for entry in &self.entries {
            match entry.pair.evaluate() {
                ScoreOutcome::Scored(_) => counts.scored += 1,
                ScoreOutcome::Illiquid => counts.illiquid += 1,
                _ => counts.degenerate += 1,
            }
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedPair;
    type IntoIter = std::slice::Iter<'a, RankedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scoring outcome tally of a ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub scored: usize,
    pub illiquid: usize,
    pub degenerate: usize,
}

/// A page of consecutive ranked entries.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    /// 1-based page number.
    pub number: usize,
    /// Rank of the first entry on the page.
    pub first_rank: usize,
    pub entries: &'a [RankedPair],
}

impl<'a> Page<'a> {
    /// Entries with their 1-based ranks.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &'a RankedPair)> {
        let (first_rank, entries) = (self.first_rank, self.entries);
        entries
            .iter()
            .enumerate()
            .map(move |(offset, entry)| (first_rank + offset, entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
