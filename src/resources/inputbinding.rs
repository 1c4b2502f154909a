//! Physical input identifiers and the binding table.
//!
//! A physical input is described by the tagged [`InputId`] enum: a keyboard
//! key, a gamepad button, a gamepad axis half, or a modifier+key combo. The
//! enum has structural equality and hashes by value, so it can key the
//! [`InputBindings`] table directly.
//!
//! Bindings are many-to-one: several inputs may map to the same
//! [`InputAction`], while each input maps to at most one action.

use std::fmt;

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::events::input::InputAction;

/// Keyboard keys the engine understands.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    Up, Down, Left, Right,
    Space, Enter, Escape, Tab, Backspace,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    Control, Shift, Alt,
}

/// Gamepad index as reported by the host (0 is the first connected pad).
pub type GamepadId = u32;

/// Buttons of the standard gamepad layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GamepadButton {
    /// D-pad.
    LeftTop,
    LeftRight,
    LeftBottom,
    LeftLeft,
    /// Face buttons.
    RightBottom,
    RightRight,
    RightLeft,
    RightTop,
    FrontLeftTop,
    FrontRightTop,
    FrontLeftBottom,
    FrontRightBottom,
    CenterLeft,
    CenterRight,
    LeftStick,
    RightStick,
}

/// Analog axes of the standard gamepad layout, each in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GamepadAxis {
    LeftStickHorizontal,
    LeftStickVertical,
    RightStickHorizontal,
    RightStickVertical,
}

/// Which half of an axis a binding listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisDirection {
    Positive,
    Negative,
}

/// Any physical input that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputId {
    Keyboard(Key),
    GamepadButton {
        gamepad: GamepadId,
        button: GamepadButton,
    },
    GamepadAxis {
        gamepad: GamepadId,
        axis: GamepadAxis,
        direction: AxisDirection,
    },
    /// Active only while both keys are held (e.g. Ctrl+P).
    Combo { modifier: Key, key: Key },
}

impl InputId {
    pub fn key(key: Key) -> Self {
        InputId::Keyboard(key)
    }

    /// Button on the first gamepad.
    pub fn button(button: GamepadButton) -> Self {
        InputId::GamepadButton { gamepad: 0, button }
    }

    pub fn combo(modifier: Key, key: Key) -> Self {
        InputId::Combo { modifier, key }
    }

    pub fn is_keyboard(&self) -> bool {
        matches!(self, InputId::Keyboard(_) | InputId::Combo { .. })
    }

    pub fn is_gamepad(&self) -> bool {
        matches!(self, InputId::GamepadButton { .. } | InputId::GamepadAxis { .. })
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputId::Keyboard(key) => write!(f, "{key:?}"),
            InputId::GamepadButton { gamepad, button } => write!(f, "Pad{gamepad} {button:?}"),
            InputId::GamepadAxis {
                gamepad,
                axis,
                direction,
            } => {
                let sign = match direction {
                    AxisDirection::Positive => '+',
                    AxisDirection::Negative => '-',
                };
                write!(f, "Pad{gamepad} {axis:?}{sign}")
            }
            InputId::Combo { modifier, key } => write!(f, "{modifier:?}+{key:?}"),
        }
    }
}

/// Inputs bound to one action. Most actions have two to four.
pub type BoundInputs = SmallVec<[InputId; 4]>;

/// Table mapping physical inputs to logical actions.
#[derive(Debug, Clone, Default)]
pub struct InputBindings {
    map: FxHashMap<InputId, InputAction>,
}

impl InputBindings {
    /// Empty table: every action is unbound.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Keyboard, gamepad and debug-combo defaults.
    pub fn with_defaults() -> Self {
        let mut bindings = Self::empty();

        let keys = [
            (Key::W, InputAction::MoveUp),
            (Key::S, InputAction::MoveDown),
            (Key::A, InputAction::MoveLeft),
            (Key::D, InputAction::MoveRight),
            (Key::Up, InputAction::MoveUp),
            (Key::Down, InputAction::MoveDown),
            (Key::Left, InputAction::MoveLeft),
            (Key::Right, InputAction::MoveRight),
            (Key::Space, InputAction::AutoAttack),
            (Key::Digit1, InputAction::UseAbility1),
            (Key::Digit2, InputAction::UseAbility2),
            (Key::Digit3, InputAction::UseAbility3),
            (Key::Escape, InputAction::Pause),
            (Key::F1, InputAction::ToggleDebug),
            (Key::E, InputAction::Interact),
            (Key::Tab, InputAction::Menu),
        ];
        for (key, action) in keys {
            bindings.bind(InputId::key(key), action);
        }

        let buttons = [
            (GamepadButton::LeftTop, InputAction::MoveUp),
            (GamepadButton::LeftRight, InputAction::MoveRight),
            (GamepadButton::LeftBottom, InputAction::MoveDown),
            (GamepadButton::LeftLeft, InputAction::MoveLeft),
            (GamepadButton::RightBottom, InputAction::AutoAttack),
            (GamepadButton::RightRight, InputAction::UseAbility1),
            (GamepadButton::RightLeft, InputAction::UseAbility2),
            (GamepadButton::RightTop, InputAction::UseAbility3),
            (GamepadButton::CenterRight, InputAction::Pause),
            (GamepadButton::CenterLeft, InputAction::ToggleDebug),
        ];
        for (button, action) in buttons {
            bindings.bind(InputId::button(button), action);
        }

        let combos = [
            (Key::P, InputAction::TogglePlayerDebug),
            (Key::I, InputAction::ToggleInputDebug),
            (Key::B, InputAction::ToggleBindingEditor),
        ];
        for (key, action) in combos {
            bindings.bind(InputId::combo(Key::Control, key), action);
        }

        bindings
    }

    /// Bind `input` to `action`, replacing whatever that input was bound to.
    pub fn bind(&mut self, input: InputId, action: InputAction) -> Option<InputAction> {
        let previous = self.map.insert(input, action);
        if let Some(previous) = previous.filter(|p| *p != action) {
            debug!("{input} rebound from {previous} to {action}");
        }
        previous
    }

    /// Remove the binding for `input`, returning the action it triggered.
    pub fn unbind(&mut self, input: InputId) -> Option<InputAction> {
        self.map.remove(&input)
    }

    /// Move the action bound to `old` onto `new`.
    ///
    /// Returns `false` and leaves the table untouched when `old` is unbound.
    pub fn rebind(&mut self, old: InputId, new: InputId) -> bool {
        let Some(action) = self.unbind(old) else {
            warn!("Cannot rebind {old}: input is not bound");
            return false;
        };
        self.bind(new, action);
        debug!("Rebound {action} from {old} to {new}");
        true
    }

    /// Remove every binding of `action`.
    pub fn unbind_action(&mut self, action: InputAction) -> usize {
        let before = self.map.len();
        self.map.retain(|_, a| *a != action);
        before - self.map.len()
    }

    pub fn action_for(&self, input: &InputId) -> Option<InputAction> {
        self.map.get(input).copied()
    }

    /// Inputs bound to `action`, in a stable order.
    pub fn inputs_for(&self, action: InputAction) -> BoundInputs {
        let mut inputs: BoundInputs = self
            .map
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(input, _)| *input)
            .collect();
        inputs.sort();
        inputs
    }

    pub fn is_bound(&self, action: InputAction) -> bool {
        self.map.values().any(|a| *a == action)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InputId, &InputAction)> {
        self.map.iter()
    }

    /// Copy of every binding sorted by action, then input.
    pub fn sorted(&self) -> Vec<(InputAction, InputId)> {
        let mut all: Vec<_> = self.map.iter().map(|(i, a)| (*a, *i)).collect();
        all.sort();
        all
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_wasd_and_arrows() {
        let b = InputBindings::with_defaults();
        assert_eq!(b.action_for(&InputId::key(Key::W)), Some(InputAction::MoveUp));
        assert_eq!(b.action_for(&InputId::key(Key::Up)), Some(InputAction::MoveUp));
        assert_eq!(b.action_for(&InputId::key(Key::Space)), Some(InputAction::AutoAttack));
        assert_eq!(
            b.action_for(&InputId::combo(Key::Control, Key::B)),
            Some(InputAction::ToggleBindingEditor)
        );
        assert_eq!(
            b.action_for(&InputId::button(GamepadButton::RightBottom)),
            Some(InputAction::AutoAttack)
        );
    }

    #[test]
    fn test_inputs_for_is_many_to_one() {
        let b = InputBindings::with_defaults();
        let inputs = b.inputs_for(InputAction::MoveUp);
        assert_eq!(inputs.len(), 3);
        assert!(inputs.contains(&InputId::key(Key::W)));
        assert!(inputs.contains(&InputId::key(Key::Up)));
        assert!(inputs.contains(&InputId::button(GamepadButton::LeftTop)));
    }

    #[test]
    fn test_bind_replaces_previous_action() {
        let mut b = InputBindings::empty();
        assert_eq!(b.bind(InputId::key(Key::T), InputAction::Pause), None);
        assert_eq!(
            b.bind(InputId::key(Key::T), InputAction::Menu),
            Some(InputAction::Pause)
        );
        assert_eq!(b.len(), 1);
        assert!(!b.is_bound(InputAction::Pause));
    }

    #[test]
    fn test_unbind() {
        let mut b = InputBindings::with_defaults();
        assert_eq!(b.unbind(InputId::key(Key::W)), Some(InputAction::MoveUp));
        assert_eq!(b.action_for(&InputId::key(Key::W)), None);
        assert_eq!(b.unbind(InputId::key(Key::W)), None);
    }

    #[test]
    fn test_rebind_moves_action() {
        let mut b = InputBindings::with_defaults();
        assert!(b.rebind(InputId::key(Key::W), InputId::key(Key::T)));
        assert_eq!(b.action_for(&InputId::key(Key::W)), None);
        assert_eq!(b.action_for(&InputId::key(Key::T)), Some(InputAction::MoveUp));
    }

    #[test]
    fn test_rebind_unbound_input_is_noop() {
        let mut b = InputBindings::empty();
        assert!(!b.rebind(InputId::key(Key::Q), InputId::key(Key::T)));
        assert!(b.is_empty());
    }

    #[test]
    fn test_unbind_action_removes_all_inputs() {
        let mut b = InputBindings::with_defaults();
        assert_eq!(b.unbind_action(InputAction::MoveLeft), 3);
        assert!(!b.is_bound(InputAction::MoveLeft));
    }

    #[test]
    fn test_sorted_groups_by_action() {
        let b = InputBindings::with_defaults();
        let sorted = b.sorted();
        assert_eq!(sorted.len(), b.len());
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sorted[0].0, InputAction::MoveUp);
    }

    #[test]
    fn test_display() {
        assert_eq!(InputId::combo(Key::Control, Key::P).to_string(), "Control+P");
        assert_eq!(
            InputId::GamepadAxis {
                gamepad: 1,
                axis: GamepadAxis::LeftStickVertical,
                direction: AxisDirection::Negative,
            }
            .to_string(),
            "Pad1 LeftStickVertical-"
        );
    }
}
