//! Command-line interface definitions.
//!
//! Defines the CLI structure for bookflip using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rank combinable bazaar enchantment books by expected profit
#[derive(Parser, Debug)]
#[command(name = "bookflip")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a snapshot and show the best combinable books
    Rank(RankArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `bookflip check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate and print the resolved configuration
    Config,
    /// Fetch one snapshot and report what came back
    Connection,
}

/// Arguments for the `rank` subcommand.
#[derive(Parser, Debug)]
pub struct RankArgs {
    /// Rank a saved snapshot file instead of fetching one
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Entries per page (overrides `ranking.page_size`)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Show only this page (1-based)
    #[arg(long)]
    pub page: Option<usize>,

    /// Hide families scoring below this value
    #[arg(long)]
    pub min_score: Option<f64>,
}
