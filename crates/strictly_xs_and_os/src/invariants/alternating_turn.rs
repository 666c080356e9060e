//! Alternating turn invariant: players alternate after every legal move.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The history starts with the episode's starting player, never repeats a
/// player twice in a row, and the player to move follows the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();
        let first = game.starting_player();

        if let Some(mov) = history.first()
            && mov.player != first
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns after every legal move"
    }
}
