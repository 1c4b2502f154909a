use bevy_ecs::prelude::Component;

use crate::math::normalize_angle;

/// Facing angle in radians, 0 along +x, positive toward +y.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub radians: f64,
}

impl Rotation {
    pub fn new(radians: f64) -> Self {
        Self {
            radians: normalize_angle(radians),
        }
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }
}
