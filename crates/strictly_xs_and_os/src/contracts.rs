//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} move {Q}. The engine turns a failed precondition into the
//! illegal-move outcome; postconditions are checked in debug builds.

use super::action::{Move, MoveError};
use super::engine::GameEngine;
use super::invariants::{InvariantSet, XsAndOsInvariants};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the episode has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] in any terminal phase.
    pub fn check(game: &GameEngine) -> Result<(), MoveError> {
        if game.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the square is marked.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] if someone else is to move.
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Episode still in progress
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - Phase agrees with the board
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(game: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        XsAndOsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
