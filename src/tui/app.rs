//! Application state driving the event loop.

use super::theme::Theme;
use crate::games::tictactoe::{Board, GameMode, GameStatus, Mark, MatchState, Position};
use crate::players::Choice;
use crossterm::event::KeyCode;
use tracing::{debug, info, warn};

/// A resolved automated move, delivered back to the event loop.
///
/// `epoch` ties the result to the request that produced it; the app
/// discards results whose epoch no longer matches.
#[derive(Debug)]
pub struct AiMove {
    /// Request epoch captured when the move task was spawned.
    pub epoch: u64,
    /// The decision, including any fallback advisory.
    pub choice: Choice,
}

/// Main application state.
///
/// All mutation happens on the event-loop task; automated moves arrive
/// as [`AiMove`] messages and pass a stale-result guard before they are
/// applied.
pub struct App {
    match_state: MatchState,
    theme: Theme,
    ai_error: Option<String>,
    /// Epoch of the in-flight automated request, if any.
    pending: Option<u64>,
    epoch: u64,
    should_quit: bool,
}

impl App {
    /// Creates the application in the given mode.
    pub fn new(mode: GameMode) -> Self {
        Self {
            match_state: MatchState::new(mode),
            theme: Theme::default(),
            ai_error: None,
            pending: None,
            epoch: 0,
            should_quit: false,
        }
    }

    /// Returns the match state.
    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the advisory from the last automated move, if any.
    pub fn ai_error(&self) -> Option<&str> {
        self.ai_error.as_deref()
    }

    /// Checks whether an automated move request is in flight.
    pub fn thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Checks whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => {
                info!("user quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('m') => self.switch_mode(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    // Cells are keyed 1-9, board indices are 0-8.
                    if (1..=9).contains(&digit) {
                        self.handle_cell((digit - 1) as usize);
                    }
                }
            }
            _ => {}
        }
    }

    /// Attempts a human move at the given board index.
    ///
    /// Input that is not currently acceptable is dropped without an
    /// error: the wrong turn, a finished game, an occupied square, or an
    /// automated request in flight are all deliberate no-ops.
    fn handle_cell(&mut self, index: usize) {
        let Some(pos) = Position::from_index(index) else {
            return;
        };
        if self.pending.is_some() {
            debug!(position = %pos, "input ignored: automated move in flight");
            return;
        }
        if self.match_state.automated_to_move() {
            debug!(position = %pos, "input ignored: automated mark's turn");
            return;
        }
        if self.match_state.game().state().status() != GameStatus::InProgress {
            debug!(position = %pos, "input ignored: game is over");
            return;
        }
        if let Err(e) = self.match_state.play(pos) {
            debug!(position = %pos, error = %e, "input ignored");
        }
    }

    /// Starts a fresh game, keeping the score tally.
    pub fn restart(&mut self) {
        self.invalidate_pending();
        self.ai_error = None;
        self.match_state.restart(true);
    }

    /// Switches between two-player and versus-AI, resetting everything.
    pub fn switch_mode(&mut self) {
        self.invalidate_pending();
        self.ai_error = None;
        let mode = self.match_state.mode().toggled();
        self.match_state.set_mode(mode);
    }

    /// Toggles between the light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.name(), "theme toggled");
    }

    /// Checks whether a new automated move task should be spawned.
    pub fn wants_ai_move(&self) -> bool {
        self.pending.is_none() && self.match_state.automated_to_move()
    }

    /// Marks an automated request as in flight.
    ///
    /// Returns the request epoch plus a board snapshot and the mark to
    /// move, for the task to work from.
    pub fn begin_ai_request(&mut self) -> (u64, Board, Mark) {
        self.epoch += 1;
        self.pending = Some(self.epoch);
        self.ai_error = None;
        let state = self.match_state.game().state();
        debug!(epoch = self.epoch, "automated move request issued");
        (self.epoch, state.board().clone(), state.to_move())
    }

    /// Applies a resolved automated move, unless it went stale.
    ///
    /// A result is stale when its epoch no longer matches the pending
    /// request (restart or mode change in between) or when the game is
    /// no longer waiting on the automated mark.
    pub fn apply_ai_move(&mut self, msg: AiMove) {
        let Some(expected) = self.pending else {
            debug!(epoch = msg.epoch, "discarding automated move: nothing pending");
            return;
        };
        if msg.epoch != expected {
            debug!(epoch = msg.epoch, expected, "discarding stale automated move");
            return;
        }
        self.pending = None;

        if !self.match_state.automated_to_move() {
            debug!(epoch = msg.epoch, "discarding automated move: turn has passed");
            return;
        }

        self.ai_error = msg.choice.advisory.clone();
        match self.match_state.play(msg.choice.position) {
            Ok(()) => {
                info!(position = %msg.choice.position, "automated move applied");
            }
            Err(e) => {
                // Sources only pick empty cells, so this is a logic bug
                // rather than a user-visible condition.
                warn!(position = %msg.choice.position, error = %e, "automated move rejected");
            }
        }
    }

    /// The status line shown under the board.
    pub fn status_line(&self) -> String {
        let state = self.match_state.game().state();
        match state.status() {
            GameStatus::Won(mark) => format!("Winner: {mark}"),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => {
                if self.thinking() {
                    "AI is thinking...".to_string()
                } else if self.match_state.automated_to_move() {
                    format!("AI's turn ({})", state.to_move())
                } else {
                    format!("Next: {}", state.to_move())
                }
            }
        }
    }

    /// Drops any in-flight request so its eventual result is discarded.
    fn invalidate_pending(&mut self) {
        if self.pending.take().is_some() {
            debug!("pending automated move invalidated");
        }
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn ai_move(epoch: u64, position: Position) -> AiMove {
        AiMove {
            epoch,
            choice: Choice {
                position,
                advisory: None,
            },
        }
    }

    #[test]
    fn human_input_is_ignored_while_request_pending() {
        let mut app = App::new(GameMode::VersusAi);
        let (_epoch, _board, _mark) = app.begin_ai_request();

        app.handle_key(KeyCode::Char('5'));
        assert!(app.match_state().game().state().history().is_empty());
    }

    #[test]
    fn automated_move_applies_with_matching_epoch() {
        let mut app = App::new(GameMode::VersusAi);
        let (epoch, _board, _mark) = app.begin_ai_request();

        app.apply_ai_move(ai_move(epoch, Position::Center));

        let state = app.match_state().game().state();
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Mark::O));
        assert_eq!(state.to_move(), Mark::X);
        assert!(!app.thinking());
    }

    #[test]
    fn stale_automated_move_is_discarded_after_restart() {
        let mut app = App::new(GameMode::VersusAi);
        let (epoch, _board, _mark) = app.begin_ai_request();

        app.restart();
        app.apply_ai_move(ai_move(epoch, Position::Center));

        assert!(app.match_state().game().state().history().is_empty());
    }

    #[test]
    fn stale_automated_move_is_discarded_after_mode_change() {
        let mut app = App::new(GameMode::VersusAi);
        let (epoch, _board, _mark) = app.begin_ai_request();

        app.switch_mode();
        app.apply_ai_move(ai_move(epoch, Position::Center));

        assert!(app.match_state().game().state().history().is_empty());
        assert_eq!(app.match_state().mode(), GameMode::TwoPlayer);
    }

    #[test]
    fn fallback_advisory_is_surfaced() {
        let mut app = App::new(GameMode::VersusAi);
        let (epoch, _board, _mark) = app.begin_ai_request();

        app.apply_ai_move(AiMove {
            epoch,
            choice: Choice {
                position: Position::TopLeft,
                advisory: Some("OPENAI_API_KEY environment variable not set".to_string()),
            },
        });

        assert!(app.ai_error().is_some());
        assert_eq!(
            app.match_state().game().state().board().get(Position::TopLeft),
            Square::Occupied(Mark::O)
        );
    }

    #[test]
    fn human_cannot_move_for_the_automated_mark() {
        let app_mode = GameMode::VersusAi;
        let mut app = App::new(app_mode);
        // O (automated) opens in versus-AI, so direct input must be dropped.
        app.handle_key(KeyCode::Char('1'));
        assert!(app.match_state().game().state().history().is_empty());
    }

    #[test]
    fn theme_toggles_both_ways() {
        let mut app = App::new(GameMode::TwoPlayer);
        assert_eq!(app.theme(), Theme::Light);
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Dark);
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn status_line_tracks_the_game() {
        let mut app = App::new(GameMode::TwoPlayer);
        assert_eq!(app.status_line(), "Next: X");
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.status_line(), "Next: O");
    }
}
