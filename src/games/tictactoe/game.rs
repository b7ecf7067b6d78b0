//! Game engine: move validation and status transitions.

use super::position::Position;
use super::rules;
use super::types::{GameState, GameStatus, Mark};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// A raw index outside 0-8 was supplied.
    #[display("position index out of range (0-8)")]
    OutOfRange,
    /// The square already holds a mark.
    #[display("square is already occupied")]
    SquareOccupied,
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
}

/// Tic-tac-toe game engine.
///
/// Wraps a [`GameState`] and enforces the move rules: no moves on a
/// finished game, no overwriting a square, and the turn marker flips
/// only while the game stays in progress.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with the given mark moving first.
    pub fn new(starting_mark: Mark) -> Self {
        Self {
            state: GameState::new(starting_mark),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current mark at the given position.
    ///
    /// On success the square is set, the status is recomputed, and the
    /// turn passes to the other mark unless the game just ended.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] when the game is no longer in
    /// progress and [`MoveError::SquareOccupied`] when the square is taken.
    #[instrument(skip(self), fields(mark = %self.state.to_move()))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.state.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied);
        }

        let mark = self.state.to_move();
        self.state.place(pos, mark);
        self.update_status();

        if self.state.status() == GameStatus::InProgress {
            self.state.advance_turn();
        }

        debug!(board = %self.state.board().display(), status = ?self.state.status(), "move applied");
        Ok(())
    }

    /// Recomputes the status from the board after a move.
    fn update_status(&mut self) {
        if let Some(winner) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner));
        } else if rules::is_draw(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
        }
    }
}
