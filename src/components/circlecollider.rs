use bevy_ecs::prelude::Component;

use crate::math::Vector2;

/// Circular body used for enemy separation and target radius.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct CircleCollider {
    pub radius: f64,
}

impl CircleCollider {
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    /// Penetration depth against another circle, `None` when they do not overlap.
    ///
    /// Circles that exactly touch do not overlap.
    pub fn overlap(&self, position: Vector2, other: &Self, other_position: Vector2) -> Option<f64> {
        let depth = self.radius + other.radius - position.distance(other_position);
        (depth > 0.0).then_some(depth)
    }
}
