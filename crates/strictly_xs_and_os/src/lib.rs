//! Strictly Xs and Os - pure game logic
//!
//! A deterministic, turn-based tic-tac-toe state machine exposed as a
//! reinforcement-learning environment core.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, the turn and the terminal
//!   cache, and exposes `reset` / `step`
//! - **Rules**: line-sum win detection and draw detection
//! - **Contracts**: move preconditions and invariant-backed postconditions
//!
//! # Example
//!
//! ```
//! use strictly_xs_and_os::{GameEngine, Phase, Player, ResetOptions};
//!
//! let mut engine = GameEngine::new();
//! engine.reset(ResetOptions::new(Player::X));
//!
//! for action in [0, 3, 1, 4] {
//!     engine.step(action)?;
//! }
//! let result = engine.step(2)?;
//! assert!(result.terminated());
//! assert_eq!(result.reward(), -0.5);
//! assert_eq!(engine.phase(), Phase::Won(Player::X));
//! # Ok::<(), strictly_xs_and_os::StepError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
mod error;
pub mod invariants;
mod options;
mod phase;
mod position;
mod rewards;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::{BoardSnapshot, GameEngine, StepInfo, StepResult};
pub use error::StepError;
pub use options::ResetOptions;
pub use phase::Phase;
pub use position::Position;
pub use rewards::RewardScheme;
pub use types::{Board, Observation, Player, Square};

/// Number of discrete actions (one per cell).
pub const ACTION_COUNT: usize = 9;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;
