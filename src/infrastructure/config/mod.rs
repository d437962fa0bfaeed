//! Configuration loading.

pub mod logging;
pub mod ranking;
pub mod settings;

pub use logging::LoggingConfig;
pub use ranking::RankingConfig;
pub use settings::Config;
