use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::rigidbody::RigidBody;

/// Integrate positions from velocities, once per tick.
///
/// The player is integrated by its own controller earlier in the tick.
pub fn movement_system(
    mut query: Query<(&mut MapPosition, &RigidBody), Without<PlayerControlled>>,
) {
    for (mut position, rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        position.pos += rigidbody.velocity;
    }
}
