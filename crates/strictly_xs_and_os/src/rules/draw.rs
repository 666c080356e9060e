//! Draw detection for Xs and Os.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.occupied() == 9
}

/// A draw is a full board with no winning line.
///
/// The win check runs first: a full board can also hold a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    check_winner(board).is_none() && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn fill(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let square = match ch {
                    'X' => Square::Occupied(Player::X),
                    'O' => Square::Occupied(Player::O),
                    _ => Square::Empty,
                };
                if let Some(pos) = Position::from_row_col(r, c) {
                    board.set(pos, square);
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill(["X..", ".O.", "..."]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = fill(["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = fill(["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
