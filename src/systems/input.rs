//! Input systems.
//!
//! - [`update_input_state`] reads the host-written [`RawInput`] each frame and
//!   recomputes [`InputState`].
//! - Input events are emitted for action presses/releases, and toggling debug
//!   mode via [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::camera2d::{Camera2D, CameraView};
use crate::resources::input::{InputProvider, InputState};
use crate::resources::rawinput::RawInput;

/// Update the `InputState` resource from raw device state and emit edge events.
///
/// The camera, when present, converts the cursor into world coordinates.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    raw: Res<RawInput>,
    camera: Option<Res<Camera2D>>,
    mut commands: Commands,
) {
    let view = camera.as_deref().map(|c| c as &dyn CameraView);
    input.update(&raw, view);

    for action in InputAction::ALL {
        let state = input.action_state(action);
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }

    if input.just_pressed(InputAction::ToggleDebug) {
        commands.trigger(SwitchDebugEvent {});
    }
}
