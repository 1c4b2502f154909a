//! Published player state.
//!
//! [`PlayerSnapshot`] is written once per tick after the player has moved and
//! aimed. Anything outside the controller (camera follow, HUD, the headless
//! report) reads the player through it or the [`PlayerState`] trait.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::math::Vector2;

/// Read-only player capability.
pub trait PlayerState {
    fn position(&self) -> Vector2;
    /// Facing in radians.
    fn rotation(&self) -> f64;
    fn velocity(&self) -> Vector2;
    fn is_auto_aim_enabled(&self) -> bool;

    /// Unit vector of the current facing.
    fn aim_direction(&self) -> Vector2 {
        Vector2::from_angle(self.rotation())
    }

    fn using_gamepad(&self) -> bool {
        false
    }
}

/// Player state as of the end of the last tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: Vector2,
    pub velocity: Vector2,
    pub rotation: f64,
    pub auto_aim_enabled: bool,
    pub using_gamepad: bool,
    /// Tick on which the snapshot was taken.
    pub frame: u64,
}

impl PlayerState for PlayerSnapshot {
    fn position(&self) -> Vector2 {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn velocity(&self) -> Vector2 {
        self.velocity
    }

    fn is_auto_aim_enabled(&self) -> bool {
        self.auto_aim_enabled
    }

    fn using_gamepad(&self) -> bool {
        self.using_gamepad
    }
}
