//! Enemy component and steering behaviours.
//!
//! Each enemy carries a [`Steering`] behaviour that turns "where am I, where
//! is the player" into a velocity for the current tick. Behaviours that need
//! memory (the zigzag phase) keep it inside the enum variant.

use bevy_ecs::prelude::Component;

use crate::components::stat::Stat;
use crate::math::Vector2;

const DEFAULT_STOP_DISTANCE: f64 = 1.0;
const DEFAULT_IDEAL_DISTANCE: f64 = 100.0;
const DEFAULT_ZIGZAG_AMPLITUDE: f64 = 2.0;
const DEFAULT_ZIGZAG_FREQUENCY: f64 = 0.05;

/// How an enemy approaches the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steering {
    /// Head straight for the target, stopping `stop_distance` short of it.
    Chase { stop_distance: f64 },
    /// Approach or retreat to hold `ideal_distance`, idle within `tolerance` of it.
    KeepDistance { ideal_distance: f64, tolerance: f64 },
    /// Chase with a sinusoidal sideways weave. `phase` advances by
    /// `frequency` every tick.
    Zigzag {
        amplitude: f64,
        frequency: f64,
        phase: f64,
    },
}

impl Steering {
    pub fn chase() -> Self {
        Steering::Chase {
            stop_distance: DEFAULT_STOP_DISTANCE,
        }
    }

    pub fn keep_distance(ideal_distance: f64) -> Self {
        Steering::KeepDistance {
            ideal_distance,
            tolerance: 0.0,
        }
    }

    pub fn zigzag(phase: f64) -> Self {
        Steering::Zigzag {
            amplitude: DEFAULT_ZIGZAG_AMPLITUDE,
            frequency: DEFAULT_ZIGZAG_FREQUENCY,
            phase,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Steering::Chase { .. } => "chase",
            Steering::KeepDistance { .. } => "keep_distance",
            Steering::Zigzag { .. } => "zigzag",
        }
    }

    /// Velocity for this tick when moving from `from` toward `to` at `speed`.
    ///
    /// Chase and keep-distance never overshoot their goal distance. A
    /// zero-length offset yields zero velocity.
    pub fn velocity(&mut self, from: Vector2, to: Vector2, speed: f64) -> Vector2 {
        let offset = to - from;
        let distance = offset.magnitude();
        let dir = offset.normalized();

        match self {
            Steering::Chase { stop_distance } => {
                let remaining = distance - *stop_distance;
                if remaining <= 0.0 {
                    return Vector2::ZERO;
                }
                dir * speed.min(remaining)
            }
            Steering::KeepDistance {
                ideal_distance,
                tolerance,
            } => {
                let error = distance - *ideal_distance;
                if error.abs() <= *tolerance {
                    return Vector2::ZERO;
                }
                // Positive error approaches, negative retreats.
                dir * speed.min(error.abs()) * error.signum()
            }
            Steering::Zigzag {
                amplitude,
                frequency,
                phase,
            } => {
                *phase += *frequency;
                if dir.is_zero() {
                    return Vector2::ZERO;
                }
                let weave = dir.perpendicular() * (*amplitude * phase.sin());
                (dir + weave).normalized() * speed
            }
        }
    }
}

/// Hostile entity steered toward the player.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    /// Maximum distance covered per tick.
    pub speed: Stat,
    pub steering: Steering,
    /// Published with the target list; not used for aim selection.
    pub priority: f64,
}

impl Enemy {
    pub fn new(speed: f64, steering: Steering) -> Self {
        Self {
            speed: Stat::new(speed),
            steering,
            priority: 0.0,
        }
    }

    /// Percent bonus on top of the base speed.
    pub fn with_speed_bonus(mut self, percent: f64) -> Self {
        self.speed.set_bonus(percent);
        self
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
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
    fn test_chase_moves_at_speed() {
        let mut s = Steering::chase();
        let v = s.velocity(Vector2::ZERO, Vector2::new(100.0, 0.0), 1.5);
        assert_eq!(v, Vector2::new(1.5, 0.0));
    }

    #[test]
    fn test_chase_stops_short_without_overshoot() {
        let mut s = Steering::Chase { stop_distance: 10.0 };
        let v = s.velocity(Vector2::ZERO, Vector2::new(0.0, 11.0), 5.0);
        assert!(approx_eq(v.y, 1.0));
        let v = s.velocity(Vector2::ZERO, Vector2::new(0.0, 9.0), 5.0);
        assert_eq!(v, Vector2::ZERO);
    }

    #[test]
    fn test_keep_distance_approaches_and_retreats() {
        let mut s = Steering::keep_distance(100.0);
        let far = s.velocity(Vector2::new(300.0, 0.0), Vector2::ZERO, 2.0);
        assert!(approx_eq(far.x, -2.0));

        let near = s.velocity(Vector2::new(50.0, 0.0), Vector2::ZERO, 2.0);
        assert!(approx_eq(near.x, 2.0));

        let almost = s.velocity(Vector2::new(101.0, 0.0), Vector2::ZERO, 2.0);
        assert!(approx_eq(almost.x, -1.0));

        let exact = s.velocity(Vector2::new(100.0, 0.0), Vector2::ZERO, 2.0);
        assert_eq!(exact, Vector2::ZERO);
    }

    #[test]
    fn test_keep_distance_tolerance() {
        let mut s = Steering::KeepDistance {
            ideal_distance: 100.0,
            tolerance: 5.0,
        };
        assert_eq!(s.velocity(Vector2::new(104.0, 0.0), Vector2::ZERO, 2.0), Vector2::ZERO);
    }

    #[test]
    fn test_zigzag_weaves_at_constant_speed() {
        let mut s = Steering::zigzag(0.0);
        let mut sideways = Vec::new();
        for _ in 0..80 {
            let v = s.velocity(Vector2::ZERO, Vector2::new(1000.0, 0.0), 2.0);
            assert!(approx_eq(v.magnitude(), 2.0));
            assert!(v.x > 0.0);
            sideways.push(v.y);
        }
        assert!(sideways.iter().any(|y| *y > 0.1));
        assert!(sideways.iter().any(|y| *y < -0.1));
        match s {
            Steering::Zigzag { phase, .. } => assert!(approx_eq(phase, 80.0 * 0.05)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_zero_offset_is_still() {
        for mut s in [Steering::chase(), Steering::keep_distance(0.0), Steering::zigzag(1.0)] {
            assert_eq!(s.velocity(Vector2::new(3.0, 3.0), Vector2::new(3.0, 3.0), 2.0), Vector2::ZERO);
        }
    }
}
