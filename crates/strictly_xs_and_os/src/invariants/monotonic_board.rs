//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameEngine, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an
/// occupied square and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
