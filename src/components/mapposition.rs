use bevy_ecs::prelude::Component;

use crate::math::Vector2;

/// World-space position of an entity's pivot.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
        }
    }

    /// Teleport; velocity and rotation are untouched.
    pub fn set_position(&mut self, pos: Vector2) {
        self.pos = pos;
    }
}

impl From<Vector2> for MapPosition {
    fn from(pos: Vector2) -> Self {
        Self { pos }
    }
}
