//! Command-line interface for tictac_duel.

use crate::games::tictactoe::GameMode;
use clap::{Parser, ValueEnum};

/// Terminal tic-tac-toe with a human or LLM-backed opponent
#[derive(Parser, Debug)]
#[command(name = "tictac_duel")]
#[command(about = "Terminal tic-tac-toe with a human or LLM-backed opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opening game mode
    #[arg(long, value_enum, default_value_t = ModeArg::TwoPlayer)]
    pub mode: ModeArg,

    /// Strategy used by the automated opponent
    #[arg(long, value_enum, default_value_t = StrategyArg::Llm)]
    pub strategy: StrategyArg,

    /// Path to the opponent configuration file
    #[arg(long, default_value = "ai_config.toml")]
    pub config: std::path::PathBuf,

    /// Log file (the TUI owns the terminal, so logs go to a file)
    #[arg(long, default_value = "tictac_duel.log")]
    pub log_file: std::path::PathBuf,
}

/// Game mode selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Both marks come from the keyboard
    TwoPlayer,
    /// Mark O is played by the automated opponent
    VersusAi,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::VersusAi => GameMode::VersusAi,
        }
    }
}

/// Automated-opponent strategy selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Uniform-random legal moves
    Random,
    /// LLM move suggestions with random fallback
    Llm,
}
