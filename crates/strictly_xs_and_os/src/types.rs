//! Core domain types for Xs and Os.

use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Observation handed to drivers and renderers: one mark per cell, row-major.
///
/// `X` is `+1`, `O` is `-1`, empty cells are `0`.
pub type Observation = [[i8; 3]; 3];

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (mark `+1`, moves first unless reset says otherwise).
    #[default]
    X,
    /// Player O (mark `-1`).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Numeric mark used in observations and line sums.
    pub fn mark(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Numeric value of the square (`+1`, `-1` or `0`).
    pub fn value(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    ///
    /// Only the engine writes to a board; everything else reads snapshots.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Numeric grid view of the board.
    pub fn observation(&self) -> Observation {
        let mut grid = [[0i8; 3]; 3];
        for pos in Position::ALL {
            grid[pos.row()][pos.col()] = self.get(pos).value();
        }
        grid
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their action index so a player can read off moves.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_are_opposite() {
        assert_eq!(Player::X.mark(), 1);
        assert_eq!(Player::O.mark(), -1);
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }

    #[test]
    fn test_observation_is_row_major() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));

        let obs = board.observation();
        assert_eq!(obs, [[0, 0, 1], [-1, 0, 0], [0, 0, 0]]);
        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_display_shows_indices_for_empty_squares() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.display(), "0|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }
}
