//! Match-level state: game mode, score tally, and game lifecycle.

use super::game::{Game, MoveError};
use super::position::Position;
use super::types::{GameStatus, Mark};
use tracing::{debug, info, instrument};

/// Who the second seat is driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Both marks come from direct input.
    TwoPlayer,
    /// Mark O is driven by an automated move source.
    VersusAi,
}

impl GameMode {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::VersusAi => "Versus AI",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VersusAi,
            GameMode::VersusAi => GameMode::TwoPlayer,
        }
    }

    /// The mark driven by the automated move source, if any.
    pub fn automated_mark(self) -> Option<Mark> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VersusAi => Some(Mark::O),
        }
    }

    /// The mark that opens a game under this mode.
    ///
    /// The automated mark opens in versus-AI games; X opens otherwise.
    pub fn starting_mark(self) -> Mark {
        self.automated_mark().unwrap_or(Mark::X)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::TwoPlayer
    }
}

/// Win counts per mark for the current session.
///
/// Survives restarts; cleared only on a mode change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
}

impl ScoreTally {
    /// Returns the win count for a mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A running match: the current game plus mode and score tally.
#[derive(Debug, Clone)]
pub struct MatchState {
    game: Game,
    mode: GameMode,
    scores: ScoreTally,
}

impl MatchState {
    /// Creates a match in the given mode with a fresh game.
    pub fn new(mode: GameMode) -> Self {
        Self {
            game: Game::new(mode.starting_mark()),
            mode,
            scores: ScoreTally::default(),
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the score tally.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Checks whether the automated mark is due to move.
    pub fn automated_to_move(&self) -> bool {
        self.game.state().status() == GameStatus::InProgress
            && self.mode.automated_mark() == Some(self.game.state().to_move())
    }

    /// Plays the current mark at the given position.
    ///
    /// A move that wins the game bumps the winner's tally. The tally is
    /// bumped at most once per game because a finished game rejects all
    /// further moves.
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        self.game.make_move(pos)?;
        if let GameStatus::Won(winner) = self.game.state().status() {
            self.scores.record_win(winner);
            info!(winner = %winner, wins = self.scores.wins(winner), "game won");
        }
        Ok(())
    }

    /// Plays the current mark at a raw board index (0-8).
    pub fn play_at(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange)?;
        self.play(pos)
    }

    /// Starts a fresh game, keeping the tally.
    ///
    /// With `preserve_starting_mark` the opening seat follows the mode
    /// (the automated mark opens versus-AI games); without it X opens.
    #[instrument(skip(self), fields(mode = self.mode.name()))]
    pub fn restart(&mut self, preserve_starting_mark: bool) {
        let starting = if preserve_starting_mark {
            self.mode.starting_mark()
        } else {
            Mark::X
        };
        debug!(starting = %starting, "restarting game");
        self.game = Game::new(starting);
    }

    /// Switches mode: fresh game, fresh tally, opening seat per the mode.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(mode = mode.name(), "switching mode");
        self.mode = mode;
        self.scores.clear();
        self.game = Game::new(mode.starting_mark());
    }
}
