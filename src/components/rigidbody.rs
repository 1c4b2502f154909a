//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the per-tick velocity of an entity.
//! Integration is fixed per tick: the movement system adds `velocity` to
//! [`MapPosition`](super::mapposition::MapPosition) once per tick.
//!
//! The `frozen` flag allows temporarily disabling movement, useful when an
//! entity's position is controlled externally.

use bevy_ecs::prelude::Component;
use log::warn;

use crate::math::Vector2;

/// Kinematic body storing velocity in world units per tick.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::with_velocity(Vector2::new(2.0, 0.0));
/// rb.decelerate(0.5);
/// assert_eq!(rb.speed(), 1.5);
/// rb.frozen = true;
/// ```
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per tick.
    pub velocity: Vector2,
    /// When true, movement system skips this entity.
    pub frozen: bool,
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(velocity: Vector2) -> Self {
        Self {
            velocity,
            frozen: false,
        }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Get the current velocity.
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Freeze the rigid body, preventing movement system from updating it.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Unfreeze the rigid body, allowing movement system to update it.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// Set speed while maintaining the current direction of velocity.
    ///
    /// If the current velocity is zero, this is a no-op since there's no
    /// direction to maintain.
    pub fn set_speed(&mut self, new_speed: f64) {
        if self.velocity.is_zero() {
            warn!("RigidBody::set_speed called with zero velocity - operation ignored");
            return;
        }
        self.velocity = self.velocity.normalized() * new_speed;
    }

    /// Reduce speed by `amount`, keeping direction and stopping at exactly zero.
    pub fn decelerate(&mut self, amount: f64) {
        let speed = self.speed();
        if speed <= amount {
            self.velocity = Vector2::ZERO;
        } else {
            self.velocity = self.velocity * ((speed - amount) / speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_is_at_rest() {
        let rb = RigidBody::new();
        assert!(rb.velocity().is_zero());
        assert!(!rb.frozen);
    }

    #[test]
    fn test_set_speed_keeps_direction() {
        let mut rb = RigidBody::with_velocity(Vector2::new(3.0, 4.0));
        rb.set_speed(10.0);
        assert!(approx_eq(rb.velocity.x, 6.0));
        assert!(approx_eq(rb.velocity.y, 8.0));
    }

    #[test]
    fn test_set_speed_on_zero_velocity_is_noop() {
        let mut rb = RigidBody::new();
        rb.set_speed(5.0);
        assert!(rb.velocity.is_zero());
    }

    #[test]
    fn test_decelerate_preserves_direction() {
        let mut rb = RigidBody::with_velocity(Vector2::new(3.0, 4.0));
        rb.decelerate(2.5);
        assert!(approx_eq(rb.speed(), 2.5));
        assert!(approx_eq(rb.velocity.x / rb.velocity.y, 0.75));
    }

    #[test]
    fn test_decelerate_floors_at_zero() {
        let mut rb = RigidBody::with_velocity(Vector2::new(0.3, 0.0));
        rb.decelerate(0.5);
        assert_eq!(rb.velocity, Vector2::ZERO);
    }

    #[test]
    fn test_freeze_unfreeze() {
        let mut rb = RigidBody::new();
        rb.freeze();
        assert!(rb.frozen);
        rb.unfreeze();
        assert!(!rb.frozen);
    }
}
