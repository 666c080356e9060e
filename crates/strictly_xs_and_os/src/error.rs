//! Protocol errors raised by the engine.
//!
//! Playing onto an occupied square is not an error: it is a terminal game
//! outcome. Only caller mistakes end up here.

use derive_more::{Display, Error};

/// Error returned by [`GameEngine::step`](crate::GameEngine::step).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StepError {
    /// The action index does not address a cell.
    #[display("Action {} is out of range (must be 0-8)", action)]
    ActionOutOfRange {
        /// The rejected action.
        action: usize,
    },

    /// A move postcondition failed. Only checked in debug builds.
    #[display("Invariant violation: {}", details)]
    InvariantViolation {
        /// Descriptions of the violated invariants.
        details: String,
    },
}
