//! Key binding editor model.
//!
//! Holds the state of the (UI-less) binding editor: whether it is open and
//! which action, if any, is waiting for a key. While listening, the next key
//! that goes down is bound to that action, optionally replacing one of the
//! action's existing inputs. The listening flag belongs to the editor alone
//! and is cleared by that key press or by [`BindingEditor::cancel`].

use bevy_ecs::prelude::Resource;
use log::{debug, info, warn};

use crate::events::input::InputAction;
use crate::resources::inputbinding::{InputBindings, InputId, Key};

/// A capture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingBinding {
    pub action: InputAction,
    /// Input to replace, or `None` to add a new binding.
    pub replace: Option<InputId>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct BindingEditor {
    open: bool,
    pending: Option<PendingBinding>,
    /// Keys that were down on the previous call to [`BindingEditor::handle_keys`].
    last_keys: Vec<Key>,
}

impl BindingEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for a key to add to `action`.
    pub fn start_listening(&mut self, action: InputAction) {
        self.pending = Some(PendingBinding {
            action,
            replace: None,
        });
        debug!("Binding editor listening for {action}");
    }

    /// Listen for a key that replaces `old` on `action`.
    pub fn start_rebind(&mut self, action: InputAction, old: InputId) {
        self.pending = Some(PendingBinding {
            action,
            replace: Some(old),
        });
        debug!("Binding editor listening to replace {old} on {action}");
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("Binding editor stopped listening for {}", pending.action);
        }
    }

    pub fn is_listening(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<PendingBinding> {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.cancel();
        }
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
        info!(
            "Binding editor {}",
            if self.open { "opened" } else { "closed" }
        );
    }

    /// Feed this frame's held keys.
    ///
    /// When listening and a key went down since the previous call, the
    /// lowest such key is bound and listening ends. Returns the binding made.
    pub fn handle_keys(
        &mut self,
        keys_down: &[Key],
        bindings: &mut InputBindings,
    ) -> Option<(InputAction, InputId)> {
        let pressed = keys_down
            .iter()
            .filter(|k| !self.last_keys.contains(k))
            .min()
            .copied();
        self.last_keys = keys_down.to_vec();

        let key = pressed?;
        let pending = self.pending.take()?;
        let new = InputId::key(key);

        if let Some(old) = pending.replace {
            if bindings.action_for(&old) == Some(pending.action) {
                bindings.unbind(old);
            } else {
                warn!("{old} is no longer bound to {}, adding {new} instead", pending.action);
            }
        }
        bindings.bind(new, pending.action);
        info!("Bound {new} to {}", pending.action);
        Some((pending.action, new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_listening_ignores_keys() {
        let mut editor = BindingEditor::new();
        let mut bindings = InputBindings::empty();
        assert_eq!(editor.handle_keys(&[Key::T], &mut bindings), None);
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_add_binding_on_next_press() {
        let mut editor = BindingEditor::new();
        let mut bindings = InputBindings::with_defaults();
        editor.start_listening(InputAction::Interact);
        assert!(editor.is_listening());

        assert_eq!(editor.handle_keys(&[], &mut bindings), None);
        let made = editor.handle_keys(&[Key::F], &mut bindings);
        assert_eq!(made, Some((InputAction::Interact, InputId::key(Key::F))));
        assert!(!editor.is_listening());
        assert_eq!(bindings.inputs_for(InputAction::Interact).len(), 2);
    }

    #[test]
    fn test_key_held_before_listening_is_not_captured() {
        let mut editor = BindingEditor::new();
        let mut bindings = InputBindings::empty();
        editor.handle_keys(&[Key::Control, Key::B], &mut bindings);
        editor.start_listening(InputAction::Pause);
        assert_eq!(editor.handle_keys(&[Key::Control, Key::B], &mut bindings), None);
        assert!(editor.is_listening());
        let made = editor.handle_keys(&[Key::Control, Key::B, Key::Q], &mut bindings);
        assert_eq!(made, Some((InputAction::Pause, InputId::key(Key::Q))));
    }

    #[test]
    fn test_rebind_replaces_old_input() {
        let mut editor = BindingEditor::new();
        let mut bindings = InputBindings::with_defaults();
        editor.start_rebind(InputAction::MoveUp, InputId::key(Key::W));
        editor.handle_keys(&[Key::I], &mut bindings);
        assert_eq!(bindings.action_for(&InputId::key(Key::W)), None);
        assert_eq!(bindings.action_for(&InputId::key(Key::I)), Some(InputAction::MoveUp));
    }

    #[test]
    fn test_cancel_and_close_stop_listening() {
        let mut editor = BindingEditor::new();
        editor.start_listening(InputAction::Menu);
        editor.cancel();
        assert!(!editor.is_listening());

        editor.toggle();
        editor.start_listening(InputAction::Menu);
        editor.toggle();
        assert!(!editor.is_open());
        assert!(!editor.is_listening());
    }
}
