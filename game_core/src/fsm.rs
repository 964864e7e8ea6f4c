//! Round State Machine
//!
//! Owns the lifecycle of a round: before the first start, while the ball is
//! in play, and after someone reaches the winning score.

use crate::{Score, Side};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winner: Side,
    pub score: Score, // Final score snapshot
}

impl RoundOutcome {
    pub fn message(&self) -> &'static str {
        match self.winner {
            Side::Left => "You Win!",
            Side::Right => "Your opponent Wins!",
        }
    }

    /// Text for the end-of-round panel
    pub fn summary(&self) -> String {
        format!(
            "{} Final Score: {} - {}",
            self.message(),
            self.score.left,
            self.score.right
        )
    }
}

/// Round states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Idle,
    Running,
    Ended(RoundOutcome),
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    Start,
    Restart,
    Win(RoundOutcome),
}

/// Result of a state transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    success: bool,
    from_state: RoundState,
    to_state: RoundState,
    action: RoundAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> RoundState {
        self.from_state
    }

    pub fn to_state(&self) -> RoundState {
        self.to_state
    }

    pub fn action(&self) -> RoundAction {
        self.action
    }
}

/// Round Finite State Machine
#[derive(Debug, Clone)]
pub struct RoundFsm {
    state: RoundState,
}

impl RoundFsm {
    pub fn new() -> Self {
        Self {
            state: RoundState::Idle,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn can_transition(&self, action: RoundAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RoundAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: RoundAction) -> Option<RoundState> {
        match (self.state, action) {
            // Start and restart are interchangeable outside a running round
            (RoundState::Idle, RoundAction::Start | RoundAction::Restart) => {
                Some(RoundState::Running)
            }
            (RoundState::Ended(_), RoundAction::Start | RoundAction::Restart) => {
                Some(RoundState::Running)
            }

            (RoundState::Running, RoundAction::Win(outcome)) => Some(RoundState::Ended(outcome)),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RoundState::Running)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.state, RoundState::Ended(_))
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl Default for RoundFsm {
    fn default() -> Self {
        Self::new()
    }
}
