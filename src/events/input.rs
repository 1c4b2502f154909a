//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when an action's
//! edge state changes (press or release). The [`InputAction`] enum lists all
//! recognized logical actions.
//!
//! Systems can subscribe to these events to react to input without directly
//! reading the [`InputState`](crate::resources::input::InputState) resource.

use std::fmt;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Enumeration of logical input actions.
///
/// These abstract the physical keys and gamepad buttons into
/// gameplay-meaningful actions. The set is closed; bindings map physical
/// inputs onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputAction {
    /// Move up (default: W, Up arrow, D-pad up).
    MoveUp,
    /// Move down (default: S, Down arrow, D-pad down).
    MoveDown,
    /// Move left (default: A, Left arrow, D-pad left).
    MoveLeft,
    /// Move right (default: D, Right arrow, D-pad right).
    MoveRight,
    /// Primary attack; its press also toggles auto-aim (default: Space).
    AutoAttack,
    UseAbility1,
    UseAbility2,
    UseAbility3,
    Pause,
    /// Debug overlay toggle (default: F1).
    ToggleDebug,
    Interact,
    Menu,
    // Debug-only actions, bound to Ctrl combos by default.
    TogglePlayerDebug,
    ToggleInputDebug,
    ToggleBindingEditor,
}

impl InputAction {
    /// Every action, in declaration order.
    pub const ALL: [InputAction; 15] = [
        InputAction::MoveUp,
        InputAction::MoveDown,
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::AutoAttack,
        InputAction::UseAbility1,
        InputAction::UseAbility2,
        InputAction::UseAbility3,
        InputAction::Pause,
        InputAction::ToggleDebug,
        InputAction::Interact,
        InputAction::Menu,
        InputAction::TogglePlayerDebug,
        InputAction::ToggleInputDebug,
        InputAction::ToggleBindingEditor,
    ];

    /// Human-readable name for logs and binding listings.
    pub fn name(self) -> &'static str {
        match self {
            InputAction::MoveUp => "Move Up",
            InputAction::MoveDown => "Move Down",
            InputAction::MoveLeft => "Move Left",
            InputAction::MoveRight => "Move Right",
            InputAction::AutoAttack => "Auto Attack",
            InputAction::UseAbility1 => "Ability 1",
            InputAction::UseAbility2 => "Ability 2",
            InputAction::UseAbility3 => "Ability 3",
            InputAction::Pause => "Pause",
            InputAction::ToggleDebug => "Toggle Debug",
            InputAction::Interact => "Interact",
            InputAction::Menu => "Menu",
            InputAction::TogglePlayerDebug => "Toggle Player Debug",
            InputAction::ToggleInputDebug => "Toggle Input Debug",
            InputAction::ToggleBindingEditor => "Toggle Binding Editor",
        }
    }

    /// Whether this action only exists for development tooling.
    pub fn is_debug(self) -> bool {
        matches!(
            self,
            InputAction::TogglePlayerDebug
                | InputAction::ToggleInputDebug
                | InputAction::ToggleBindingEditor
        )
    }
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Event emitted when an input action is pressed or released.
///
/// The `action` field identifies which logical action changed, and `pressed`
/// indicates whether it was a press (true) or release (false).
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_each_action_once() {
        let mut sorted = InputAction::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), InputAction::ALL.len());
    }

    #[test]
    fn test_debug_actions() {
        assert!(InputAction::ToggleBindingEditor.is_debug());
        assert!(!InputAction::ToggleDebug.is_debug());
        assert!(!InputAction::MoveUp.is_debug());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(InputAction::AutoAttack.to_string(), "Auto Attack");
    }
}
