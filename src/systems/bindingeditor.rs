//! Binding editor system.
//!
//! Opens/closes the [`BindingEditor`] on its toggle action and feeds it the
//! keys held this frame so a pending capture can complete.
use bevy_ecs::prelude::*;

use crate::events::input::InputAction;
use crate::resources::bindingeditor::BindingEditor;
use crate::resources::input::{InputProvider, InputState};
use crate::resources::rawinput::RawInput;

pub fn binding_editor_system(
    mut editor: ResMut<BindingEditor>,
    mut input: ResMut<InputState>,
    raw: Res<RawInput>,
) {
    if input.just_pressed(InputAction::ToggleBindingEditor) {
        editor.toggle();
    }
    editor.handle_keys(&raw.keys_down(), input.bindings_mut());
}
