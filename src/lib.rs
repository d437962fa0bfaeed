//! Bookflip - rank combinable bazaar enchantment books.
//!
//! One bazaar snapshot goes in; an ordered list of book families comes out,
//! ranked by how profitable it looks to buy sixteen tier I books, combine
//! them, and sell the resulting tier V book.
//!
//! # Modules
//!
//! - [`domain`] - Items, pairs, scoring, and the ranking engine
//! - [`port`] - The [`port::SnapshotSource`] seam
//! - [`adapter`] - Bazaar HTTP client, file source, and the CLI
//! - [`application`] - The fetch-and-rank use case
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use bookflip::domain::{Ranking, RankingOptions, Snapshot};
//!
//! let snapshot = Snapshot::from_json(r#"{
//!     "success": true,
//!     "products": {
//!         "ENCHANTMENT_SMITE_1": {
//!             "sell_summary": [{ "pricePerUnit": 100.0 }],
//!             "quick_status": { "sellMovingWeek": 500 }
//!         },
//!         "ENCHANTMENT_SMITE_5": {
//!             "buy_summary": [{ "pricePerUnit": 5000.0 }],
//!             "quick_status": { "buyMovingWeek": 40 }
//!         }
//!     }
//! }"#).unwrap();
//!
//! let ranking = Ranking::build(&snapshot, &RankingOptions::default());
//! for page in ranking.chunks(3) {
//!     for (rank, entry) in page.ranked() {
//!         println!("#{rank} {} ({:.2})", entry.display_name(), entry.score());
//!     }
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
