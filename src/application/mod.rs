//! Use cases built on the domain and ports.

pub mod ranking;

pub use ranking::RankingService;
