//! Command-line adapter: argument parsing, dispatch, and rendering.

pub mod check;
pub mod command;
pub mod output;
pub mod rank;

use std::process::ExitCode;

use tracing::debug;

pub use command::{CheckCommand, Cli, ColorChoice, Commands, RankArgs};

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Apply global flags, load configuration, and run the selected command.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    let mut config = Config::load_or_default(cli.config.as_ref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    config.init_logging();
    debug!(config_path = ?cli.config, "Configuration loaded");

    match &cli.command {
        Commands::Rank(args) => rank::execute(&config, args).await,
        Commands::Check(CheckCommand::Config) => Ok(check::config(&config)),
        Commands::Check(CheckCommand::Connection) => check::connection(&config).await,
    }
}
