//! Bazaar snapshot sources.

pub mod client;
pub mod file;
pub mod settings;

pub use client::BazaarClient;
pub use file::FileSnapshotSource;
pub use settings::BazaarConfig;
