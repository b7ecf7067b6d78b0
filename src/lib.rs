//! Terminal tic-tac-toe with a human or LLM-backed opponent.
//!
//! # Architecture
//!
//! - **Game state machine** ([`MatchState`] and friends): board, turn
//!   marker, win/draw rules, score tally, and game mode.
//! - **Move sources** ([`MoveSource`]): pick the automated mark's next
//!   cell, either uniformly at random or by asking an LLM and falling
//!   back to random on any failure.
//! - **TUI** ([`tui`]): single-threaded event loop that owns the state,
//!   spawns one automated-move task per turn, and discards stale results.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tictac_duel::{AiConfig, GameMode, LlmSource, MoveSource};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AiConfig::default();
//! let source: Arc<dyn MoveSource> = Arc::new(LlmSource::from_config(&config));
//! tictac_duel::tui::run(GameMode::VersusAi, source, config.move_delay()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod llm_client;
mod players;

// Public modules
pub mod cli;
pub mod tui;

// Crate-level exports - configuration
pub use config::{AiConfig, ConfigError};

// Crate-level exports - LLM client
pub use llm_client::{LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - move sources
pub use players::{BoardFull, Choice, LlmSource, MoveSource, RandomSource, SuggestionError, extract_suggestion};

// Crate-level exports - game types
pub use games::tictactoe::{
    Board, Game, GameMode, GameState, GameStatus, Mark, MatchState, MoveError, Position,
    ScoreTally, Square,
};
