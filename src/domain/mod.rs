//! Market domain: items, pairs, and the ranking engine.

pub mod item;
pub mod pair;
pub mod ranking;
pub mod roman;
pub mod snapshot;

pub use item::Item;
pub use pair::{Pair, ScoreOutcome, BULK_QUANTITY};
pub use ranking::{Page, RankedPair, Ranking, RankingOptions, DEFAULT_PAGE_SIZE};
pub use snapshot::Snapshot;
