//! Win detection by line sums.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The 8 lines checked for a win: rows, columns, then both diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Sum of the marks on a line (`X` = +1, `O` = -1, empty = 0).
pub fn line_sum(board: &Board, line: &[Position; 3]) -> i8 {
    line.iter().map(|pos| board.get(*pos).value()).sum()
}

/// Returns the first complete line and its owner.
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.iter().find_map(|line| match line_sum(board, line) {
        3 => Some((Player::X, *line)),
        -3 => Some((Player::O, *line)),
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if a line sums to that player's mark times three,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(player, &line);
                assert_eq!(check_winner(&board), Some(player), "{line:?}");
                assert_eq!(winning_line(&board), Some((player, line)));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(line_sum(&board, &LINES[0]), 1);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::O, &[Position::TopRight, Position::Center]);
        assert_eq!(check_winner(&board), None);
    }
}
