//! Keyboard controls
//!
//! Key events flip held-key flags; each tick reads a snapshot of them.

/// Held controls for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub thrusting: bool,
    pub braking: bool,
    pub turning_left: bool,
    pub turning_right: bool,
}

/// Keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Thrust,
    Brake,
    TurnLeft,
    TurnRight,
}

impl Key {
    /// Decode a `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "Up" => Some(Key::Thrust),
            "ArrowDown" | "Down" => Some(Key::Brake),
            "ArrowLeft" | "Left" => Some(Key::TurnLeft),
            "ArrowRight" | "Right" => Some(Key::TurnRight),
            _ => None,
        }
    }

    /// Decode a legacy `KeyboardEvent.keyCode`
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            38 => Some(Key::Thrust),
            40 => Some(Key::Brake),
            37 => Some(Key::TurnLeft),
            39 => Some(Key::TurnRight),
            _ => None,
        }
    }
}

impl TickInput {
    /// Record a key going down (`pressed`) or up
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Thrust => self.thrusting = pressed,
            Key::Brake => self.braking = pressed,
            Key::TurnLeft => self.turning_left = pressed,
            Key::TurnRight => self.turning_right = pressed,
        }
    }

    /// Handle a raw key event, preferring the key name over the code.
    /// Returns false for keys that don't map to a control.
    pub fn handle_key_event(&mut self, name: &str, code: u32, pressed: bool) -> bool {
        match Key::from_name(name).or_else(|| Key::from_code(code)) {
            Some(key) => {
                self.set_key(key, pressed);
                true
            }
            None => false,
        }
    }
}
