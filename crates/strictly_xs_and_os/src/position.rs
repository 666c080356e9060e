//! Board positions and the action-to-cell mapping.

use super::error::StepError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board (0-8).
///
/// Actions map to positions row-major: `row = action / 3`,
/// `column = action % 3`. This is the only mapping the engine accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (action 0)
    TopLeft,
    /// Top-center (action 1)
    TopCenter,
    /// Top-right (action 2)
    TopRight,
    /// Middle-left (action 3)
    MiddleLeft,
    /// Center (action 4)
    Center,
    /// Middle-right (action 5)
    MiddleRight,
    /// Bottom-left (action 6)
    BottomLeft,
    /// Bottom-center (action 7)
    BottomCenter,
    /// Bottom-right (action 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in action order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8), which is also its action.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Resolves a discrete action into a position.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::ActionOutOfRange`] for actions outside `0..=8`.
    #[instrument]
    pub fn from_action(action: usize) -> Result<Self, StepError> {
        Self::from_index(action).ok_or(StepError::ActionOutOfRange { action })
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<usize> for Position {
    type Error = StepError;

    fn try_from(action: usize) -> Result<Self, Self::Error> {
        Self::from_action(action)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_enum_order_matches_actions() {
        for (action, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), action);
            assert_eq!(Position::from_action(action), Ok(pos));
        }
    }

    #[test]
    fn test_row_major_mapping() {
        assert_eq!(Position::TopRight.row(), 0);
        assert_eq!(Position::TopRight.col(), 2);
        assert_eq!(Position::MiddleLeft.row(), 1);
        assert_eq!(Position::MiddleLeft.col(), 0);
        assert_eq!(Position::from_row_col(2, 1), Some(Position::BottomCenter));
        assert_eq!(Position::from_row_col(3, 0), None);
    }

    #[test]
    fn test_out_of_range_action_rejected() {
        assert_eq!(
            Position::from_action(9),
            Err(StepError::ActionOutOfRange { action: 9 })
        );
        assert!(Position::try_from(usize::MAX).is_err());
    }
}
