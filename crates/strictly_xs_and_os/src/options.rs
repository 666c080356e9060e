//! Options accepted by [`GameEngine::reset`](crate::GameEngine::reset).

use super::Player;
use serde::{Deserialize, Serialize};

/// Reset configuration.
///
/// Absent options mean `X` moves first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetOptions {
    /// Player who makes the first move.
    pub starting_player: Player,
}

impl ResetOptions {
    /// Options with the given first player.
    pub fn new(starting_player: Player) -> Self {
        Self { starting_player }
    }
}
