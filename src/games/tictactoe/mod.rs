//! Tic-tac-toe: board, rules, engine, and match state.

mod game;
mod match_state;
mod position;
pub mod rules;
mod types;

pub use game::{Game, MoveError};
pub use match_state::{GameMode, MatchState, ScoreTally};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Mark, Square};
