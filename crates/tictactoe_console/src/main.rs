//! Console tic-tac-toe entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, Console, ReaderSource, session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    info!(?config, "Starting tic-tac-toe");

    let console = Console::new(ReaderSource::stdin(), std::io::stdout().lock());
    let (_, status) = session::play(console, &config)?;
    info!(%status, "Exiting");
    Ok(())
}
