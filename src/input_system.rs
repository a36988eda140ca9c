//! Keyboard state for the game loop
//!
//! Host key listeners write booleans into a [`KeyState`]; the game loop
//! reads it exactly once per frame through [`KeyState::snapshot`], so every
//! system inside one tick sees the same input even if key events race
//! between frames (last write before the snapshot wins).
//!
//! # Architecture
//!
//! Input processing happens in two steps:
//! 1. Raw key codes (`"ArrowLeft"`, `"KeyA"`, ...) become [`Key`]s
//! 2. Aliased keys collapse into an [`InputSnapshot`] of three [`Action`]s

use std::collections::HashMap;

/// Keys the game cares about, named after platform key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    KeyA,
    KeyD,
    KeyW,
    Space,
}

impl Key {
    /// Maps a platform key code to a [`Key`]. Unknown codes are ignored.
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "KeyA" => Some(Key::KeyA),
            "KeyD" => Some(Key::KeyD),
            "KeyW" => Some(Key::KeyW),
            "Space" => Some(Key::Space),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::ArrowUp => "ArrowUp",
            Key::KeyA => "KeyA",
            Key::KeyD => "KeyD",
            Key::KeyW => "KeyW",
            Key::Space => "Space",
        }
    }
}

/// High-level actions the player can trigger.
///
/// Each action has a small alias set; any key in the set triggers it, and
/// all aliases have exactly the same effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action {
    pub fn keys(&self) -> &'static [Key] {
        match self {
            Action::MoveLeft => &[Key::ArrowLeft, Key::KeyA],
            Action::MoveRight => &[Key::ArrowRight, Key::KeyD],
            Action::Jump => &[Key::Space, Key::ArrowUp, Key::KeyW],
        }
    }
}

/// The boolean key map the host's key listeners write into.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    keys: HashMap<Key, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.keys.insert(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys.insert(key, false);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.keys.get(&key).copied().unwrap_or(false)
    }

    /// True if any alias of `action` is held.
    pub fn is_action_held(&self, action: Action) -> bool {
        action.keys().iter().any(|&key| self.is_down(key))
    }

    /// Forgets every held key (used when the listeners are torn down).
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    /// Reads the map once and collapses it into the per-frame input.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.is_action_held(Action::MoveLeft),
            right: self.is_action_held(Action::MoveRight),
            jump: self.is_action_held(Action::Jump),
        }
    }
}

/// Input as seen by one tick of the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputSnapshot {
    /// No keys held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Builds a snapshot as if exactly `keys` were held.
    pub fn from_keys(keys: &[Key]) -> Self {
        let mut state = KeyState::new();
        for &key in keys {
            state.key_down(key);
        }
        state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_round_trip() {
        for key in [
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::ArrowUp,
            Key::KeyA,
            Key::KeyD,
            Key::KeyW,
            Key::Space,
        ] {
            assert_eq!(Key::from_code(key.code()), Some(key));
        }
        assert_eq!(Key::from_code("KeyQ"), None);
    }

    #[test]
    fn test_aliases_have_same_effect() {
        assert_eq!(
            InputSnapshot::from_keys(&[Key::ArrowLeft]),
            InputSnapshot::from_keys(&[Key::KeyA])
        );
        assert_eq!(
            InputSnapshot::from_keys(&[Key::ArrowRight]),
            InputSnapshot::from_keys(&[Key::KeyD])
        );
        let space = InputSnapshot::from_keys(&[Key::Space]);
        assert_eq!(space, InputSnapshot::from_keys(&[Key::ArrowUp]));
        assert_eq!(space, InputSnapshot::from_keys(&[Key::KeyW]));
        assert!(space.jump);
    }

    #[test]
    fn test_last_write_wins() {
        let mut state = KeyState::new();
        state.key_down(Key::KeyD);
        state.key_up(Key::KeyD);
        assert!(!state.snapshot().right);

        state.key_down(Key::KeyD);
        assert!(state.snapshot().right);
    }

    #[test]
    fn test_release_all() {
        let mut state = KeyState::new();
        state.key_down(Key::Space);
        state.key_down(Key::ArrowLeft);
        state.release_all();
        assert_eq!(state.snapshot(), InputSnapshot::idle());
    }

    #[test]
    fn test_one_alias_released_other_still_held() {
        let mut state = KeyState::new();
        state.key_down(Key::ArrowLeft);
        state.key_down(Key::KeyA);
        state.key_up(Key::ArrowLeft);
        assert!(state.is_action_held(Action::MoveLeft));
    }
}
