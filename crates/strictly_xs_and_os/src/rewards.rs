//! Reward table for the environment.

use serde::{Deserialize, Serialize};

/// Scalar rewards returned by [`GameEngine::step`](crate::GameEngine::step).
///
/// The defaults are the environment's published contract. Note the win
/// asymmetry: the move that completes a line is charged `win_move`, while
/// every later step on the frozen board returns `won_replay`. Training code
/// may depend on it, so it is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardScheme {
    /// Ordinary legal move that does not end the game.
    pub step: f32,
    /// Legal move that completes a line.
    pub win_move: f32,
    /// Any step after the game was won.
    pub won_replay: f32,
    /// Legal move that fills the board without a line, and every step after.
    pub draw: f32,
    /// Move onto an occupied square.
    pub illegal_move: f32,
    /// Any step after an illegal move.
    pub illegal_replay: f32,
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            step: 0.0,
            win_move: -0.5,
            won_replay: 1.0,
            draw: 0.0,
            illegal_move: -1.0,
            illegal_replay: -1.0,
        }
    }
}
