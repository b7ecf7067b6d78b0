//! Tests for match-level state: moves, scoring, and mode changes.

use tictac_duel::{GameMode, GameStatus, Mark, MatchState, MoveError, Position, Square};

/// Plays a sequence of raw indices, panicking on any rejection.
fn play_all(m: &mut MatchState, indices: &[usize]) {
    for &idx in indices {
        m.play_at(idx).unwrap_or_else(|e| panic!("move {idx} rejected: {e}"));
    }
}

#[test]
fn x_moves_first_in_two_player() {
    let m = MatchState::new(GameMode::TwoPlayer);
    assert_eq!(m.game().state().to_move(), Mark::X);
}

#[test]
fn automated_mark_moves_first_in_versus_ai() {
    let m = MatchState::new(GameMode::VersusAi);
    assert_eq!(m.game().state().to_move(), Mark::O);
    assert!(m.automated_to_move());
}

#[test]
fn marks_alternate_after_each_move() {
    let mut m = MatchState::new(GameMode::TwoPlayer);

    m.play(Position::Center).unwrap();
    assert_eq!(m.game().state().to_move(), Mark::O);

    m.play(Position::TopLeft).unwrap();
    assert_eq!(m.game().state().to_move(), Mark::X);
}

#[test]
fn a_move_sets_exactly_the_played_square() {
    let mut m = MatchState::new(GameMode::TwoPlayer);
    m.play(Position::Center).unwrap();

    let board = m.game().state().board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
    let occupied = board.squares().iter().filter(|s| **s != Square::Empty).count();
    assert_eq!(occupied, 1);
}

#[test]
fn occupied_square_is_rejected_and_nothing_changes() {
    let mut m = MatchState::new(GameMode::TwoPlayer);
    m.play(Position::Center).unwrap();
    let before = m.game().state().clone();

    let err = m.play(Position::Center).unwrap_err();
    assert_eq!(err, MoveError::SquareOccupied);
    assert_eq!(m.game().state(), &before);
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut m = MatchState::new(GameMode::TwoPlayer);
    assert_eq!(m.play_at(9).unwrap_err(), MoveError::OutOfRange);
    assert!(m.game().state().history().is_empty());
}

#[test]
fn left_column_win_scores_exactly_once() {
    let mut m = MatchState::new(GameMode::TwoPlayer);

    // X at 0, 3, 6; O at 1, 4.
    play_all(&mut m, &[0, 1, 3, 4, 6]);

    assert_eq!(m.game().state().status(), GameStatus::Won(Mark::X));
    assert_eq!(m.scores().wins(Mark::X), 1);
    assert_eq!(m.scores().wins(Mark::O), 0);
}

#[test]
fn turn_marker_stays_on_the_winner() {
    let mut m = MatchState::new(GameMode::TwoPlayer);
    play_all(&mut m, &[0, 1, 3, 4, 6]);

    // The game ended, so the turn did not flip.
    assert_eq!(m.game().state().to_move(), Mark::X);
}

#[test]
fn finished_game_rejects_further_moves() {
    let mut m = MatchState::new(GameMode::TwoPlayer);
    play_all(&mut m, &[0, 1, 3, 4, 6]);
    let before = m.game().state().clone();

    let err = m.play(Position::BottomRight).unwrap_err();
    assert_eq!(err, MoveError::GameOver);
    assert_eq!(m.game().state(), &before);
    // The tally did not move either.
    assert_eq!(m.scores().wins(Mark::X), 1);
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    let mut m = MatchState::new(GameMode::TwoPlayer);

    // Ends as X O X / O X X / O X O, nobody lines up.
    play_all(&mut m, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);

    assert_eq!(m.game().state().status(), GameStatus::Draw);
    assert_eq!(m.scores().wins(Mark::X), 0);
    assert_eq!(m.scores().wins(Mark::O), 0);
}

#[test]
fn restart_keeps_the_tally() {
    let mut m = MatchState::new(GameMode::TwoPlayer);
    play_all(&mut m, &[0, 1, 3, 4, 6]);
    assert_eq!(m.scores().wins(Mark::X), 1);

    m.restart(true);

    assert_eq!(m.game().state().status(), GameStatus::InProgress);
    assert!(m.game().state().history().is_empty());
    assert_eq!(m.scores().wins(Mark::X), 1);
}

#[test]
fn restart_seats_by_mode_when_preserving() {
    let mut m = MatchState::new(GameMode::VersusAi);
    m.play(Position::Center).unwrap(); // O opens

    m.restart(true);
    assert_eq!(m.game().state().to_move(), Mark::O);

    m.restart(false);
    assert_eq!(m.game().state().to_move(), Mark::X);
}

#[test]
fn mode_change_resets_everything() {
    let mut m = MatchState::new(GameMode::TwoPlayer);
    play_all(&mut m, &[0, 1, 3, 4, 6]);
    assert_eq!(m.scores().wins(Mark::X), 1);

    m.set_mode(GameMode::VersusAi);

    assert_eq!(m.mode(), GameMode::VersusAi);
    assert_eq!(m.game().state().status(), GameStatus::InProgress);
    assert!(m.game().state().history().is_empty());
    assert_eq!(m.scores().wins(Mark::X), 0);
    // The automated mark opens under the new mode.
    assert_eq!(m.game().state().to_move(), Mark::O);
}

#[test]
fn o_can_win_and_score() {
    let mut m = MatchState::new(GameMode::TwoPlayer);

    // X scatters over 0, 1, 8; O takes the middle row.
    play_all(&mut m, &[0, 3, 1, 4, 8, 5]);

    assert_eq!(m.game().state().status(), GameStatus::Won(Mark::O));
    assert_eq!(m.scores().wins(Mark::O), 1);
    assert_eq!(m.scores().wins(Mark::X), 0);
}
