//! Draw detection.

use super::super::types::Board;
use super::win::check_winner;

/// Checks whether the game is drawn: board full, no winner.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::position::Position;
    use super::super::super::types::{Mark, Square};
    use super::*;

    #[test]
    fn empty_board_is_not_a_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn partial_board_is_not_a_draw() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        assert!(!is_draw(&board));
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::O));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        board.set(Position::MiddleLeft, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::X));
        board.set(Position::MiddleRight, Square::Occupied(Mark::X));
        board.set(Position::BottomLeft, Square::Occupied(Mark::O));
        board.set(Position::BottomCenter, Square::Occupied(Mark::X));
        board.set(Position::BottomRight, Square::Occupied(Mark::O));

        assert!(is_draw(&board));
    }

    #[test]
    fn full_board_with_a_winner_is_not_a_draw() {
        let mut board = Board::new();
        // X X X / O O X / O X O
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        board.set(Position::MiddleLeft, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::O));
        board.set(Position::MiddleRight, Square::Occupied(Mark::X));
        board.set(Position::BottomLeft, Square::Occupied(Mark::O));
        board.set(Position::BottomCenter, Square::Occupied(Mark::X));
        board.set(Position::BottomRight, Square::Occupied(Mark::O));

        assert!(!is_draw(&board));
    }
}
