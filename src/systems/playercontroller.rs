//! Player controller systems.
//!
//! Reads the shared [`InputState`] and drives entities carrying a
//! [`PlayerControlled`] component:
//! - [`player_movement`] accelerates or decelerates the `RigidBody` and
//!   integrates `MapPosition` for the tick.
//! - [`player_aim`] resolves `Rotation` from auto-aim or manual aim, then
//!   applies the AutoAttack toggle for the next tick.
//! - [`publish_player_snapshot`] copies the final state into
//!   [`PlayerSnapshot`] for readers outside the controller.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::playercontrolled::{PlayerControlled, direction_label};
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::events::input::InputAction;
use crate::resources::debugmode::DebugMode;
use crate::resources::input::{InputProvider, InputState};
use crate::resources::playersnapshot::PlayerSnapshot;
use crate::resources::targets::NearbyTargets;
use crate::resources::worldtime::WorldTime;

/// Apply one tick of movement input to each controlled entity.
pub fn player_movement(
    mut query: Query<(&mut PlayerControlled, &mut RigidBody, &mut MapPosition)>,
    input_state: Res<InputState>,
) {
    let intent = input_state.movement_vector();
    for (mut controller, mut rigidbody, mut position) in query.iter_mut() {
        controller.using_gamepad = input_state.using_gamepad();
        rigidbody.velocity = controller.accelerate(rigidbody.velocity, intent);
        if !rigidbody.frozen {
            position.pos += rigidbody.velocity;
        }
    }
}

/// Resolve each controlled entity's facing for this tick.
pub fn player_aim(
    mut query: Query<(&mut PlayerControlled, &MapPosition, &mut Rotation)>,
    input_state: Res<InputState>,
    targets: Res<NearbyTargets>,
) {
    let toggle = input_state.just_pressed(InputAction::AutoAttack);
    for (mut controller, position, mut rotation) in query.iter_mut() {
        rotation.radians = controller.resolve_rotation(
            &*input_state,
            position.pos,
            rotation.radians,
            targets.as_slice(),
        );
        if toggle {
            let enabled = controller.toggle_auto_aim();
            debug!("Auto-aim {}", if enabled { "enabled" } else { "disabled" });
        }
    }
}

/// Publish the controlled entity's end-of-tick state.
pub fn publish_player_snapshot(
    query: Query<(&PlayerControlled, &MapPosition, &RigidBody, &Rotation)>,
    mut snapshot: ResMut<PlayerSnapshot>,
    time: Option<Res<WorldTime>>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let Some((controller, position, rigidbody, rotation)) = query.iter().next() else {
        return;
    };
    *snapshot = PlayerSnapshot {
        position: position.pos,
        velocity: rigidbody.velocity,
        rotation: rotation.radians,
        auto_aim_enabled: controller.auto_aim_enabled,
        using_gamepad: controller.using_gamepad,
        frame: time.map_or(0, |t| t.frame_count),
    };
    if debug_mode.is_some() {
        debug!(
            "Player at {} moving {}, facing {} ({:.1} deg), auto-aim {}",
            snapshot.position,
            snapshot.velocity,
            direction_label(snapshot.rotation),
            rotation.degrees(),
            snapshot.auto_aim_enabled
        );
    }
}
