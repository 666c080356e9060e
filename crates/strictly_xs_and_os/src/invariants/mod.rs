//! First-class invariants for Xs and Os.
//!
//! Invariants are logical properties that must hold after every step.
//! They are testable independently and back the move contract's
//! postcondition.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod alternating_turn;
pub mod monotonic_board;
pub mod terminal_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use terminal_consistent::TerminalConsistentInvariant;

/// All engine invariants as a composable set.
pub type XsAndOsInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    TerminalConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player, Position, ResetOptions, Square};

    #[test]
    fn test_invariant_set_holds_for_fresh_engine() {
        let game = GameEngine::new();
        assert!(XsAndOsInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_terminal_replays() {
        let mut game = GameEngine::new();
        game.reset(ResetOptions::new(Player::O));
        for action in [0, 3, 1, 4, 2, 8, 8] {
            game.step(action).unwrap();
            assert!(XsAndOsInvariants::check_all(&game).is_ok());
        }
        assert!(game.phase().is_won());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameEngine::new();
        game.step(4).unwrap();

        // Flip the only mark: breaks monotonicity; the history still alternates.
        game.board.set(Position::Center, Square::Occupied(Player::O));
        let violations = XsAndOsInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);

        // Hand the turn back to X as well.
        game.to_move = Player::X;
        let violations = XsAndOsInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameEngine::new();
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
