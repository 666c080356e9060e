//! Step/reset state machine for Xs and Os.
//!
//! The engine owns the board, the turn and the terminal-state cache
//! ([`Phase`]). Each `step` is evaluated in a fixed priority order: frozen
//! terminal phases replay their reward first, then the move is validated,
//! then applied and scored.

use super::action::Move;
use super::contracts::{Contract, MoveContract};
use super::error::StepError;
use super::options::ResetOptions;
use super::phase::Phase;
use super::rewards::RewardScheme;
use super::rules;
use super::types::{Board, Observation, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Auxiliary information returned alongside an observation.
///
/// Empty except when an illegal move is involved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    player: Option<Player>,
}

impl StepInfo {
    fn wrong_action(player: Player) -> Self {
        Self {
            message: Some(format!("player {} played a wrong action", player)),
            player: Some(player),
        }
    }

    fn illegal_replay(player: Player) -> Self {
        Self {
            message: Some("illegal move already played".to_string()),
            player: Some(player),
        }
    }

    /// Human-readable status, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Player who played the illegal move, if any.
    pub fn player(&self) -> Option<Player> {
        self.player
    }

    /// True when the record carries no entries.
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.player.is_none()
    }
}

/// Result of one environment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    observation: Observation,
    reward: f32,
    terminated: bool,
    truncated: bool,
    info: StepInfo,
}

impl StepResult {
    fn new(observation: Observation, reward: f32, terminated: bool, info: StepInfo) -> Self {
        Self {
            observation,
            reward,
            terminated,
            truncated: false,
            info,
        }
    }

    /// Board after the step.
    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    /// Scalar reward for the step.
    pub fn reward(&self) -> f32 {
        self.reward
    }

    /// Whether the episode is over.
    pub fn terminated(&self) -> bool {
        self.terminated
    }

    /// Always false: episodes are never cut short.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Auxiliary information.
    pub fn info(&self) -> &StepInfo {
        &self.info
    }
}

/// Read-only view of the engine handed to renderers and drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move next.
    pub to_move: Player,
    /// Episode phase.
    pub phase: Phase,
}

/// Xs and Os game engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) starting_player: Player,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
    rewards: RewardScheme,
}

impl GameEngine {
    /// Creates an engine with the default reward scheme, ready to play with X first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rewards(RewardScheme::default())
    }

    /// Creates an engine with a custom reward scheme.
    #[instrument]
    pub fn with_rewards(rewards: RewardScheme) -> Self {
        let starting_player = ResetOptions::default().starting_player;
        Self {
            board: Board::new(),
            to_move: starting_player,
            starting_player,
            phase: Phase::InProgress,
            history: Vec::new(),
            rewards,
        }
    }

    /// Starts a fresh episode.
    ///
    /// Clears the board, hands the turn to `options.starting_player` and
    /// clears the terminal cache. Returns the empty observation and an empty
    /// info record.
    #[instrument(skip(self))]
    pub fn reset(&mut self, options: ResetOptions) -> (Observation, StepInfo) {
        self.board = Board::new();
        self.to_move = options.starting_player;
        self.starting_player = options.starting_player;
        self.phase = Phase::InProgress;
        self.history.clear();

        info!(starting_player = %options.starting_player, "Episode reset");
        (self.board.observation(), StepInfo::default())
    }

    /// Plays `action` for the player to move.
    ///
    /// Terminal phases short-circuit and replay their fixed reward without
    /// touching the board. Moving onto an occupied square ends the episode
    /// as [`Phase::IllegalMovePlayed`].
    ///
    /// # Errors
    ///
    /// Returns [`StepError::ActionOutOfRange`] if the game is in progress and
    /// `action` is not in `0..=8`. Nothing is mutated in that case.
    #[instrument(skip(self), fields(player = %self.to_move, phase = ?self.phase))]
    pub fn step(&mut self, action: usize) -> Result<StepResult, StepError> {
        match self.phase {
            Phase::IllegalMovePlayed(player) => {
                debug!("Replaying illegal-move outcome");
                return Ok(self.frozen(self.rewards.illegal_replay, StepInfo::illegal_replay(player)));
            }
            Phase::Won(_) => {
                debug!("Replaying won outcome");
                return Ok(self.frozen(self.rewards.won_replay, StepInfo::default()));
            }
            Phase::Drawn => {
                debug!("Replaying drawn outcome");
                return Ok(self.frozen(self.rewards.draw, StepInfo::default()));
            }
            Phase::InProgress => {}
        }

        let position = Position::from_action(action)?;
        let action = Move::new(self.to_move, position);
        if let Err(error) = MoveContract::pre(self, &action) {
            warn!(%error, "Illegal move ends the episode");
            self.phase = Phase::IllegalMovePlayed(self.to_move);
            return Ok(self.frozen(self.rewards.illegal_move, StepInfo::wrong_action(self.to_move)));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(position, Square::Occupied(action.player));
        self.history.push(action);
        self.to_move = action.player.opponent();

        let reward = if let Some(winner) = rules::check_winner(&self.board) {
            info!(%winner, moves = self.history.len(), "Game won");
            self.phase = Phase::Won(winner);
            self.rewards.win_move
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            self.phase = Phase::Drawn;
            self.rewards.draw
        } else {
            self.rewards.step
        };

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self).map_err(|e| StepError::InvariantViolation {
            details: e.to_string(),
        })?;

        debug!(%action, reward, "Move applied");
        Ok(StepResult::new(
            self.board.observation(),
            reward,
            self.phase.is_terminal(),
            StepInfo::default(),
        ))
    }

    fn frozen(&self, reward: f32, info: StepInfo) -> StepResult {
        StepResult::new(self.board.observation(), reward, true, info)
    }

    /// Immutable copy of what a renderer needs.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            board: self.board,
            to_move: self.to_move,
            phase: self.phase,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current observation.
    pub fn observation(&self) -> Observation {
        self.board.observation()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Player who moved first in this episode.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Returns the episode phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the episode is frozen.
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Legal moves played this episode.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Reward table in use.
    pub fn rewards(&self) -> &RewardScheme {
        &self.rewards
    }

    /// Actions addressing empty squares. Empty once the episode is over.
    #[instrument(skip(self))]
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
            .into_iter()
            .map(Position::to_index)
            .collect()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
