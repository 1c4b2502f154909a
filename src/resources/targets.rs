//! Per-tick snapshot of aimable targets.
//!
//! The scene rebuilds [`NearbyTargets`] from enemy entities every tick. The
//! player controller reads it for auto-aim and never keeps a reference to it
//! across ticks.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::math::Vector2;

/// One aimable target as seen by the player controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetInfo {
    /// Stable identifier (the entity bits for ECS-spawned enemies).
    pub id: u64,
    pub pos: Vector2,
    pub vel: Vector2,
    pub radius: f64,
    /// Informational only; auto-aim picks by distance.
    pub priority: f64,
}

/// Targets published this tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct NearbyTargets {
    pub targets: Vec<TargetInfo>,
}

impl NearbyTargets {
    pub fn new(targets: Vec<TargetInfo>) -> Self {
        Self { targets }
    }

    pub fn as_slice(&self) -> &[TargetInfo] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Nearest target strictly within `range` of `origin`.
    ///
    /// Ties keep the first target in list order.
    pub fn nearest_within(&self, origin: Vector2, range: f64) -> Option<&TargetInfo> {
        nearest_within(&self.targets, origin, range)
    }
}

/// Nearest target whose squared distance to `origin` is below `range²`.
pub fn nearest_within(targets: &[TargetInfo], origin: Vector2, range: f64) -> Option<&TargetInfo> {
    let range_sq = range * range;
    let mut best: Option<(&TargetInfo, f64)> = None;
    for target in targets {
        let d = origin.distance_squared(target.pos);
        if d >= range_sq {
            continue;
        }
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((target, d));
        }
    }
    best.map(|(t, _)| t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: u64, x: f64, y: f64) -> TargetInfo {
        TargetInfo {
            id,
            pos: Vector2::new(x, y),
            vel: Vector2::ZERO,
            radius: 10.0,
            priority: 0.0,
        }
    }

    #[test]
    fn test_nearest_within_range() {
        let targets = NearbyTargets::new(vec![
            target(1, 150.0, 0.0),
            target(2, 0.0, 50.0),
            target(3, 500.0, 0.0),
        ]);
        let best = targets.nearest_within(Vector2::ZERO, 400.0);
        assert_eq!(best.map(|t| t.id), Some(2));
    }

    #[test]
    fn test_range_is_exclusive() {
        let targets = NearbyTargets::new(vec![target(1, 400.0, 0.0)]);
        assert!(targets.nearest_within(Vector2::ZERO, 400.0).is_none());
        assert!(targets.nearest_within(Vector2::ZERO, 400.5).is_some());
    }

    #[test]
    fn test_priority_does_not_break_ties() {
        let mut far = target(1, 100.0, 0.0);
        far.priority = 99.0;
        let targets = NearbyTargets::new(vec![far, target(2, 0.0, 90.0)]);
        assert_eq!(targets.nearest_within(Vector2::ZERO, 400.0).map(|t| t.id), Some(2));
    }

    #[test]
    fn test_empty() {
        let targets = NearbyTargets::default();
        assert!(targets.is_empty());
        assert!(targets.nearest_within(Vector2::ZERO, 1e9).is_none());
    }
}
