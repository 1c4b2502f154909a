//! Raw per-frame device state.
//!
//! The host (window/backend layer) writes the physical state of keyboard,
//! gamepads and cursor into [`RawInput`] once per frame, before the schedule
//! runs. Everything downstream reads devices only through this resource, so
//! tests and the headless driver can script input by mutating it directly.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::resources::inputbinding::{GamepadAxis, GamepadButton, GamepadId, Key};

/// Snapshot of physical device state for the current frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct RawInput {
    keys_down: FxHashSet<Key>,
    buttons_down: FxHashSet<(GamepadId, GamepadButton)>,
    axes: FxHashMap<(GamepadId, GamepadAxis), f64>,
    /// Connected gamepads, sorted ascending.
    gamepads: Vec<GamepadId>,
    /// Cursor position in screen pixels.
    cursor: (i32, i32),
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.keys_down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    pub fn set_key(&mut self, key: Key, down: bool) {
        if down {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn release_all_keys(&mut self) {
        self.keys_down.clear();
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn any_key_down(&self) -> bool {
        !self.keys_down.is_empty()
    }

    /// Keys currently held, in a stable order.
    pub fn keys_down(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = self.keys_down.iter().copied().collect();
        keys.sort();
        keys
    }

    /// Mark a gamepad as connected. Idempotent.
    pub fn connect_gamepad(&mut self, id: GamepadId) {
        if let Err(pos) = self.gamepads.binary_search(&id) {
            self.gamepads.insert(pos, id);
        }
    }

    /// Disconnect a gamepad and drop its buttons and axes.
    pub fn disconnect_gamepad(&mut self, id: GamepadId) {
        self.gamepads.retain(|g| *g != id);
        self.buttons_down.retain(|(g, _)| *g != id);
        self.axes.retain(|(g, _), _| *g != id);
    }

    pub fn gamepads(&self) -> &[GamepadId] {
        &self.gamepads
    }

    pub fn first_gamepad(&self) -> Option<GamepadId> {
        self.gamepads.first().copied()
    }

    pub fn is_gamepad_connected(&self, id: GamepadId) -> bool {
        self.gamepads.binary_search(&id).is_ok()
    }

    pub fn set_button(&mut self, gamepad: GamepadId, button: GamepadButton, down: bool) {
        if down {
            self.buttons_down.insert((gamepad, button));
        } else {
            self.buttons_down.remove(&(gamepad, button));
        }
    }

    pub fn is_button_down(&self, gamepad: GamepadId, button: GamepadButton) -> bool {
        self.is_gamepad_connected(gamepad) && self.buttons_down.contains(&(gamepad, button))
    }

    pub fn any_button_down(&self) -> bool {
        self.buttons_down
            .iter()
            .any(|(g, _)| self.is_gamepad_connected(*g))
    }

    /// Set an axis value, clamped to `[-1, 1]`.
    pub fn set_axis(&mut self, gamepad: GamepadId, axis: GamepadAxis, value: f64) {
        let value = if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 };
        self.axes.insert((gamepad, axis), value);
    }

    /// Axis value, 0 for unknown axes or disconnected pads.
    pub fn axis(&self, gamepad: GamepadId, axis: GamepadAxis) -> f64 {
        if !self.is_gamepad_connected(gamepad) {
            return 0.0;
        }
        self.axes.get(&(gamepad, axis)).copied().unwrap_or(0.0)
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let mut raw = RawInput::new();
        assert!(!raw.any_key_down());
        raw.press(Key::W);
        raw.set_key(Key::A, true);
        assert!(raw.is_key_down(Key::W));
        assert_eq!(raw.keys_down(), vec![Key::A, Key::W]);
        raw.release(Key::W);
        raw.set_key(Key::A, false);
        assert!(!raw.any_key_down());
    }

    #[test]
    fn test_gamepad_connection_is_sorted_and_idempotent() {
        let mut raw = RawInput::new();
        raw.connect_gamepad(2);
        raw.connect_gamepad(0);
        raw.connect_gamepad(2);
        assert_eq!(raw.gamepads(), &[0, 2]);
        assert_eq!(raw.first_gamepad(), Some(0));
    }

    #[test]
    fn test_disconnected_pad_reads_neutral() {
        let mut raw = RawInput::new();
        raw.set_axis(0, GamepadAxis::LeftStickHorizontal, 0.8);
        raw.set_button(0, GamepadButton::RightBottom, true);
        assert_eq!(raw.axis(0, GamepadAxis::LeftStickHorizontal), 0.0);
        assert!(!raw.is_button_down(0, GamepadButton::RightBottom));

        raw.connect_gamepad(0);
        assert_eq!(raw.axis(0, GamepadAxis::LeftStickHorizontal), 0.8);
        assert!(raw.is_button_down(0, GamepadButton::RightBottom));

        raw.disconnect_gamepad(0);
        raw.connect_gamepad(0);
        assert_eq!(raw.axis(0, GamepadAxis::LeftStickHorizontal), 0.0);
    }

    #[test]
    fn test_axis_is_clamped() {
        let mut raw = RawInput::new();
        raw.connect_gamepad(0);
        raw.set_axis(0, GamepadAxis::RightStickVertical, -3.0);
        assert_eq!(raw.axis(0, GamepadAxis::RightStickVertical), -1.0);
        raw.set_axis(0, GamepadAxis::RightStickVertical, f64::NAN);
        assert_eq!(raw.axis(0, GamepadAxis::RightStickVertical), 0.0);
    }
}
