//! Keyboard input handling
//!
//! Presenters report raw key names (`KeyboardEvent.key` style: "w",
//! "ArrowUp", " ", "Escape"). Presses of command keys become discrete
//! [`InputEvent`]s; movement keys are tracked as held state.

use proto::{HeldKeys, InputEvent, MatchMode};
use std::collections::VecDeque;

/// Source of input for the frame driver
pub trait InputSource {
    /// Drain discrete events queued since the last frame, oldest first
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Snapshot of the movement keys currently held
    fn held_keys(&self) -> HeldKeys;
}

/// Movement keys tracked as level-triggered state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// Map a key press to a discrete event
pub fn map_key_down(key: &str) -> Option<InputEvent> {
    match key {
        " " | "Space" => Some(InputEvent::Start),
        "p" | "P" => Some(InputEvent::PauseToggle),
        "r" | "R" => Some(InputEvent::Reset),
        "m" | "M" => Some(InputEvent::MuteToggle),
        "1" => Some(InputEvent::SelectMode(MatchMode::Ai)),
        "2" => Some(InputEvent::SelectMode(MatchMode::TwoPlayer)),
        "Escape" => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Map a key to the paddle movement it controls
pub fn map_move_key(key: &str) -> Option<MoveKey> {
    match key {
        "w" | "W" => Some(MoveKey::LeftUp),
        "s" | "S" => Some(MoveKey::LeftDown),
        "ArrowUp" => Some(MoveKey::RightUp),
        "ArrowDown" => Some(MoveKey::RightDown),
        _ => None,
    }
}

/// Keyboard state fed by key-down/key-up callbacks from the presenter
#[derive(Debug, Default)]
pub struct KeyboardState {
    pending: VecDeque<InputEvent>,
    held: HeldKeys,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Unrecognized keys are ignored.
    pub fn handle_key_down(&mut self, key: &str) {
        if let Some(event) = map_key_down(key) {
            self.pending.push_back(event);
        }
        if let Some(mv) = map_move_key(key) {
            self.set_held(mv, true);
        }
    }

    /// Handle key up event
    pub fn handle_key_up(&mut self, key: &str) {
        if let Some(mv) = map_move_key(key) {
            self.set_held(mv, false);
        }
    }

    /// Feed a discrete event directly, bypassing key mapping
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    fn set_held(&mut self, key: MoveKey, down: bool) {
        match key {
            MoveKey::LeftUp => self.held.left_up = down,
            MoveKey::LeftDown => self.held.left_down = down,
            MoveKey::RightUp => self.held.right_up = down,
            MoveKey::RightDown => self.held.right_down = down,
        }
    }
}

impl InputSource for KeyboardState {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.pending.drain(..).collect()
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }
}
