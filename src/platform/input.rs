//! Keyboard input adapter
//!
//! Converts `KeyboardEvent.code` strings into the logical actions the
//! simulation reads each frame.

use crate::sim::TickInput;

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Forward,
    Back,
    Jump,
    Reset,
}

impl Action {
    /// Map a DOM key code (layout independent) to an action
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Action::Left),
            "ArrowRight" | "KeyD" => Some(Action::Right),
            "ArrowUp" | "KeyW" => Some(Action::Forward),
            "ArrowDown" | "KeyS" => Some(Action::Back),
            "Space" => Some(Action::Jump),
            "KeyR" => Some(Action::Reset),
            _ => None,
        }
    }
}

/// Latest held state of every action, updated between frames
#[derive(Debug, Default)]
pub struct KeyboardState {
    current: TickInput,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns true if the key is bound, so the host
    /// can suppress the browser default (page scrolling on arrows/space).
    pub fn process_key(&mut self, code: &str, pressed: bool) -> bool {
        let Some(action) = Action::from_code(code) else {
            return false;
        };
        let flag = match action {
            Action::Left => &mut self.current.move_left,
            Action::Right => &mut self.current.move_right,
            Action::Forward => &mut self.current.move_forward,
            Action::Back => &mut self.current.move_back,
            Action::Jump => &mut self.current.jump,
            Action::Reset => &mut self.current.reset,
        };
        *flag = pressed;
        true
    }

    /// Snapshot for this frame's tick
    pub fn snapshot(&self) -> TickInput {
        self.current
    }

    /// Release everything (key-ups are lost while a modal dialog is open)
    pub fn clear(&mut self) {
        self.current = TickInput::default();
    }
}
