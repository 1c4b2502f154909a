//! Camera follow system.
//!
//! Runs after every position for the tick is final. Points the [`Camera2D`]
//! at the entity marked [`CameraTarget`] (or drops the target when there is
//! none) and advances the camera one step.
use bevy_ecs::prelude::*;

use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2D;

pub fn camera_follow(
    mut camera: ResMut<Camera2D>,
    query: Query<&MapPosition, With<CameraTarget>>,
) {
    camera.set_target(query.iter().next().map(|p| p.pos));
    camera.update();
}
