//! Episode phase: the engine's terminal-state cache.

use super::Player;
use serde::{Deserialize, Serialize};

/// Where the current episode stands.
///
/// The three terminal variants are mutually exclusive and, once entered,
/// persist until the next reset. Every further step replays them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board filled up without a line.
    Drawn,
    /// A player tried to mark an occupied square.
    IllegalMovePlayed(Player),
}

impl Phase {
    /// True for `Won`, `Drawn` and `IllegalMovePlayed`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }

    /// Won flag.
    pub fn is_won(&self) -> bool {
        matches!(self, Phase::Won(_))
    }

    /// Draw flag.
    pub fn is_drawn(&self) -> bool {
        matches!(self, Phase::Drawn)
    }

    /// Illegal-move flag.
    pub fn is_illegal(&self) -> bool {
        matches!(self, Phase::IllegalMovePlayed(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Player whose move ended the episode, if any did.
    pub fn triggered_by(&self) -> Option<Player> {
        match self {
            Phase::Won(player) | Phase::IllegalMovePlayed(player) => Some(*player),
            Phase::InProgress | Phase::Drawn => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::InProgress => write!(f, "In progress"),
            Phase::Won(player) => write!(f, "Player {} wins", player),
            Phase::Drawn => write!(f, "Draw"),
            Phase::IllegalMovePlayed(player) => {
                write!(f, "Player {} played an illegal move", player)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_exclusive() {
        let phases = [
            Phase::Won(Player::X),
            Phase::Drawn,
            Phase::IllegalMovePlayed(Player::O),
        ];
        for phase in phases {
            let set = [phase.is_won(), phase.is_drawn(), phase.is_illegal()]
                .iter()
                .filter(|f| **f)
                .count();
            assert_eq!(set, 1, "{phase:?}");
            assert!(phase.is_terminal());
        }
        assert!(!Phase::InProgress.is_terminal());
    }

    #[test]
    fn test_triggered_by() {
        assert_eq!(Phase::Won(Player::O).triggered_by(), Some(Player::O));
        assert_eq!(
            Phase::IllegalMovePlayed(Player::X).triggered_by(),
            Some(Player::X)
        );
        assert_eq!(Phase::Drawn.triggered_by(), None);
    }

    #[test]
    fn test_winner_only_for_won() {
        assert_eq!(Phase::Won(Player::X).winner(), Some(Player::X));
        assert_eq!(Phase::IllegalMovePlayed(Player::O).winner(), None);
        assert_eq!(Phase::Drawn.winner(), None);
        assert_eq!(Phase::InProgress.winner(), None);
    }
}
