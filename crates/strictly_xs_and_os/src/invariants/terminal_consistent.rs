//! Terminal consistency: the cached phase agrees with the board.

use super::super::rules::{check_winner, is_full};
use super::super::{GameEngine, Phase};
use super::Invariant;

/// Invariant: the terminal cache matches what the board shows.
///
/// - `Won(p)`: `p` owns a complete line.
/// - `Drawn`: the board is full with no line.
/// - `InProgress` and `IllegalMovePlayed(p)`: no line, board not full, and
///   for an illegal move `p` is still the player to move.
pub struct TerminalConsistentInvariant;

impl Invariant<GameEngine> for TerminalConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        let winner = check_winner(board);

        match game.phase() {
            Phase::Won(player) => winner == Some(player),
            Phase::Drawn => winner.is_none() && is_full(board),
            Phase::InProgress => winner.is_none() && !is_full(board),
            Phase::IllegalMovePlayed(player) => {
                winner.is_none() && !is_full(board) && player == game.to_move()
            }
        }
    }

    fn description() -> &'static str {
        "Terminal phase agrees with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_fresh_game_holds() {
        assert!(TerminalConsistentInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_draw_holds() {
        let mut game = GameEngine::new();
        for action in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
            game.step(action).unwrap();
        }
        assert_eq!(game.phase(), Phase::Drawn);
        assert!(TerminalConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_winner_violates() {
        let mut game = GameEngine::new();
        for action in [0, 3, 1, 4, 2] {
            game.step(action).unwrap();
        }
        assert_eq!(game.phase(), Phase::Won(Player::X));

        game.phase = Phase::Won(Player::O);
        assert!(!TerminalConsistentInvariant::holds(&game));
    }
}
