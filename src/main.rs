use std::process::ExitCode;

use bookflip::adapter::inbound::cli::{self, output, Cli};
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Command failed");
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
