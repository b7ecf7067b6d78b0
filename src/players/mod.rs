//! Move sources for the automated mark.

mod llm;
mod random;

pub use llm::{LlmSource, SuggestionError, extract_suggestion};
pub use random::RandomSource;

use crate::games::tictactoe::{Board, Mark, Position};
use derive_more::{Display, Error};

/// A move decision from an automated source.
#[derive(Debug, Clone)]
pub struct Choice {
    /// The cell to play.
    pub position: Position,
    /// Non-blocking advisory recorded when the preferred strategy failed
    /// and the random fallback supplied the move.
    pub advisory: Option<String>,
}

/// No move could be produced because the board has no empty square.
///
/// A full board is terminal, so sources are never consulted on one in
/// normal play; this exists so the failure is typed rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no empty square left to play")]
pub struct BoardFull;

/// Strategy that selects the next cell for the automated mark.
#[async_trait::async_trait]
pub trait MoveSource: Send + Sync {
    /// Picks a cell among the currently-empty squares.
    async fn choose(&self, board: &Board, mark: Mark) -> Result<Choice, BoardFull>;

    /// Display name for the status line.
    fn name(&self) -> &str;
}
