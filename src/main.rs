//! Tictac Duel binary entry point.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tictac_duel::cli::{Cli, StrategyArg};
use tictac_duel::{AiConfig, LlmSource, MoveSource, RandomSource, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Log to a file so tracing output does not fight the TUI for the
    // terminal.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(mode = ?cli.mode, strategy = ?cli.strategy, "starting tictac_duel");

    let config = AiConfig::load(&cli.config)?;

    let source: Arc<dyn MoveSource> = match cli.strategy {
        StrategyArg::Random => Arc::new(RandomSource),
        StrategyArg::Llm => Arc::new(LlmSource::from_config(&config)),
    };

    tui::run(cli.mode.into(), source, config.move_delay()).await
}
