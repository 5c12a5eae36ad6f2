//! Match State Machine
//!
//! Table-driven transitions between the menu, active play, pause and game
//! over. The machine only tracks which state holds; side effects (music,
//! ball serve, score reset) are applied by [`crate::Match`].

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    /// Menu: mode can be chosen, ball is parked
    #[default]
    NotStarted,
    /// Physics and scoring run every tick
    Playing,
    /// Play suspended; only pause-toggle or reset leave this state
    Paused,
    /// A side reached the win score; only reset leaves this state
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    SelectMode,
    Start,
    TogglePause,
    Reset,
    WinReached,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::NotStarted,
        }
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition. Invalid requests leave the state untouched.
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            tracing::debug!(?from_state, to_state = ?next_state, ?action, "match transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            tracing::trace!(?from_state, ?action, "ignored match action");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            // Reset wins from anywhere, including Paused and GameOver
            (_, MatchAction::Reset) => Some(MatchState::NotStarted),

            // From NotStarted
            (MatchState::NotStarted, MatchAction::SelectMode) => Some(MatchState::NotStarted),
            (MatchState::NotStarted, MatchAction::Start) => Some(MatchState::Playing),

            // From Playing
            (MatchState::Playing, MatchAction::TogglePause) => Some(MatchState::Paused),
            (MatchState::Playing, MatchAction::WinReached) => Some(MatchState::GameOver),

            // From Paused
            (MatchState::Paused, MatchAction::TogglePause) => Some(MatchState::Playing),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if physics should run this tick
    pub fn is_ticking(&self) -> bool {
        self.state == MatchState::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.state == MatchState::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.state == MatchState::GameOver
    }

    /// Play has started and not yet been reset
    pub fn is_started(&self) -> bool {
        self.state != MatchState::NotStarted
    }
}
