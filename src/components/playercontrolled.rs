//! Player motion and aim controller component.
//!
//! [`PlayerControlled`] marks the entity driven by the local player and
//! carries its tuning ([`PlayerConfig`]), the auto-aim toggle and the manual
//! aim memory ([`AimTracker`]). The arithmetic lives here as plain methods so
//! it can be exercised without a world; the systems in
//! [`crate::systems::playercontroller`] apply it to `RigidBody`, `MapPosition`
//! and `Rotation` each tick.
//!
//! Movement per tick, with `m` the movement intent:
//! - `|m| > 0`: `v += m * acceleration`, then `|v|` is capped at `max_speed * |m|`
//!   (`max_speed` is a [`Stat`], so speed bonuses scale the cap).
//! - otherwise `|v|` shrinks by `deceleration`, stopping at exactly zero.
//!
//! Aim per tick:
//! - auto: ease toward the nearest target within `auto_aim_range`, by
//!   `rotation_speed` of the shortest angular difference.
//! - manual: snap to the tracked aim direction.

use bevy_ecs::prelude::Component;

use crate::components::stat::Stat;
use crate::math::{Vector2, normalize_angle};
use crate::resources::input::InputProvider;
use crate::resources::targets::{TargetInfo, nearest_within};

/// Player movement and aim tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Base speed cap in world units per tick at full input.
    pub max_speed: f64,
    /// Velocity gained per tick at full input.
    pub acceleration: f64,
    /// Speed lost per tick without input.
    pub deceleration: f64,
    /// Fraction of the remaining angle covered per tick while auto-aiming.
    pub rotation_speed: f64,
    pub auto_aim_range: f64,
    /// Health removed from each touching enemy per tick.
    pub contact_damage: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_speed: 5.0,
            acceleration: 1.0,
            deceleration: 0.5,
            rotation_speed: 0.15,
            auto_aim_range: 400.0,
            contact_damage: 1,
        }
    }
}

/// Remembers the last manual aim direction.
///
/// The gamepad right stick wins when deflected. Otherwise a change in the
/// cursor's world position recomputes the direction from the player. With
/// neither, the previous direction is kept, so once set it never goes back
/// to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AimTracker {
    last_mouse: Option<(i32, i32)>,
    direction: Option<Vector2>,
}

impl AimTracker {
    pub fn update(&mut self, input: &dyn InputProvider, position: Vector2) -> Option<Vector2> {
        if let Some(stick) = input.gamepad_aim().filter(|s| !s.is_zero()) {
            self.direction = Some(stick.normalized());
            return self.direction;
        }

        let mouse = input.mouse_position_world();
        if self.last_mouse != Some(mouse) {
            self.last_mouse = Some(mouse);
            let to_mouse = Vector2::new(f64::from(mouse.0), f64::from(mouse.1)) - position;
            // Cursor on top of the player: keep the previous direction.
            if !to_mouse.is_zero() {
                self.direction = Some(to_mouse.normalized());
            }
        }
        self.direction
    }

    /// Last unit aim direction, if any has been established.
    pub fn direction(&self) -> Option<Vector2> {
        self.direction
    }
}

/// Component for the entity the local player controls.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerControlled {
    pub config: PlayerConfig,
    /// Effective speed cap: `config.max_speed` plus any percent bonus.
    pub max_speed: Stat,
    pub auto_aim_enabled: bool,
    pub aim: AimTracker,
    /// Mirrors the input's most recent device.
    pub using_gamepad: bool,
}

impl Default for PlayerControlled {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl PlayerControlled {
    /// Create a controller with auto-aim enabled.
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            config,
            max_speed: Stat::new(config.max_speed),
            auto_aim_enabled: true,
            aim: AimTracker::default(),
            using_gamepad: false,
        }
    }

    pub fn with_speed_bonus(mut self, percent: f64) -> Self {
        self.max_speed.set_bonus(percent);
        self
    }

    pub fn with_auto_aim(mut self, enabled: bool) -> Self {
        self.auto_aim_enabled = enabled;
        self
    }

    pub fn set_auto_aim(&mut self, enabled: bool) {
        self.auto_aim_enabled = enabled;
    }

    /// Sticky manual aim direction; `None` until a stick or cursor reading.
    pub fn aim_vector(&self) -> Option<Vector2> {
        self.aim.direction()
    }

    /// Flip auto-aim and return the new state.
    pub fn toggle_auto_aim(&mut self) -> bool {
        self.auto_aim_enabled = !self.auto_aim_enabled;
        self.auto_aim_enabled
    }

    /// Velocity after one tick of `input`.
    pub fn accelerate(&self, velocity: Vector2, input: Vector2) -> Vector2 {
        let intent = input.magnitude().min(1.0);
        if intent > 0.0 {
            let v = velocity + input * self.config.acceleration;
            return v.clamp_length(self.max_speed.value() * intent);
        }

        let speed = velocity.magnitude();
        if speed <= self.config.deceleration {
            Vector2::ZERO
        } else {
            velocity * ((speed - self.config.deceleration) / speed)
        }
    }

    /// Eased rotation toward the nearest in-range target.
    ///
    /// `None` when no target is in range or the nearest one sits exactly on
    /// `position`: the caller keeps the current rotation.
    pub fn auto_aim_rotation(
        &self,
        position: Vector2,
        rotation: f64,
        targets: &[TargetInfo],
    ) -> Option<f64> {
        let target = nearest_within(targets, position, self.config.auto_aim_range)?;
        let to_target = target.pos - position;
        if to_target.is_zero() {
            return None;
        }
        let delta = normalize_angle(to_target.angle() - rotation);
        Some(normalize_angle(rotation + delta * self.config.rotation_speed))
    }

    /// Rotation from a manual aim vector. Zero vectors leave aim unchanged.
    pub fn manual_aim_rotation(&self, aim: Vector2) -> Option<f64> {
        (!aim.is_zero()).then(|| aim.angle())
    }

    /// Resolve this tick's rotation from the current mode.
    ///
    /// The manual tracker is fed every tick so switching modes does not
    /// replay a stale cursor position.
    pub fn resolve_rotation(
        &mut self,
        input: &dyn InputProvider,
        position: Vector2,
        rotation: f64,
        targets: &[TargetInfo],
    ) -> f64 {
        let manual = self.aim.update(input, position);
        let next = if self.auto_aim_enabled {
            self.auto_aim_rotation(position, rotation, targets)
        } else {
            manual.and_then(|aim| self.manual_aim_rotation(aim))
        };
        next.unwrap_or(rotation)
    }
}

/// Coarse facing for a rotation: "right", "left", "down" or "up".
///
/// Horizontal wins when the facing is within 60 degrees of an axis. A
/// non-finite rotation has no facing and reads "idle".
pub fn direction_label(rotation: f64) -> &'static str {
    let dir = Vector2::from_angle(rotation);
    if dir.x > 0.5 {
        "right"
    } else if dir.x < -0.5 {
        "left"
    } else if dir.y > 0.5 {
        "down"
    } else if dir.y < -0.5 {
        "up"
    } else {
        "idle"
    }
}
