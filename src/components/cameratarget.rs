use bevy_ecs::prelude::Component;

/// Marker for the entity the camera follows. At most one should exist.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget;
