//! Uniform-random move source.

use super::{BoardFull, Choice, MoveSource};
use crate::games::tictactoe::{Board, Mark, Position};
use rand::seq::SliceRandom;
use tracing::debug;

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSource;

impl RandomSource {
    /// Picks one empty position uniformly at random.
    pub fn pick(board: &Board) -> Result<Position, BoardFull> {
        let open = Position::valid_moves(board);
        let mut rng = rand::thread_rng();
        open.choose(&mut rng).copied().ok_or(BoardFull)
    }
}

#[async_trait::async_trait]
impl MoveSource for RandomSource {
    async fn choose(&self, board: &Board, mark: Mark) -> Result<Choice, BoardFull> {
        let position = Self::pick(board)?;
        debug!(mark = %mark, position = %position, "picked random move");
        Ok(Choice {
            position,
            advisory: None,
        })
    }

    fn name(&self) -> &str {
        "Random"
    }
}
