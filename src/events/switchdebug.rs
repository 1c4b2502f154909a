//! Debug toggle event.
//!
//! [`update_input_state`](crate::systems::input::update_input_state) triggers
//! a [`SwitchDebugEvent`] when the debug action is pressed; the observer
//! below flips the [`DebugMode`] resource in or out of the world.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Request to flip debug diagnostics.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Insert [`DebugMode`] when absent, remove it when present.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    match debug_mode {
        Some(_) => {
            commands.remove_resource::<DebugMode>();
            info!("Debug diagnostics off");
        }
        None => {
            commands.insert_resource(DebugMode {});
            info!("Debug diagnostics on; player snapshot logged every tick");
        }
    }
}
