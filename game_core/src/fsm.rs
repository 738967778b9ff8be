//! Match phase state machine
//!
//! Tracks where a match is between the start screen, live play, the short
//! freeze after the winning point, and the win screen.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    /// Start screen, nothing has been played yet
    Waiting,
    Running,
    /// Winning point scored; frozen until the win delay elapses
    Won,
    /// Win screen, waiting for a rematch
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Win,
    DelayElapsed,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Waiting,
        }
    }

    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::info!("phase {:?} -> {:?} ({:?})", from_state, next_state, action);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::warn!("rejected {:?} while {:?}", action, from_state);
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (_, GameAction::Reset) => Some(FsmState::Waiting),

            (FsmState::Waiting, GameAction::Start) => Some(FsmState::Running),
            (FsmState::Running, GameAction::Win) => Some(FsmState::Won),
            (FsmState::Won, GameAction::DelayElapsed) => Some(FsmState::GameOver),
            (FsmState::GameOver, GameAction::Start) => Some(FsmState::Running),

            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == FsmState::Running
    }

    /// Start screen or win screen: a click starts a match
    pub fn is_waiting(&self) -> bool {
        matches!(self.state, FsmState::Waiting | FsmState::GameOver)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, FsmState::Won | FsmState::GameOver)
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
