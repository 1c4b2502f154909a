use bevy_ecs::prelude::*;

use crate::components::circlecollider::CircleCollider;
use crate::components::enemy::Enemy;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::targets::{NearbyTargets, TargetInfo};

/// Rebuild [`NearbyTargets`] from every enemy entity.
///
/// Entries are ordered by entity id so ties in auto-aim are reproducible.
/// Dead enemies still waiting for despawn are skipped.
pub fn collect_targets(
    query: Query<(
        Entity,
        &MapPosition,
        &RigidBody,
        &CircleCollider,
        &Enemy,
        Option<&Health>,
    )>,
    mut targets: ResMut<NearbyTargets>,
) {
    targets.targets.clear();
    targets
        .targets
        .extend(
            query
                .iter()
                .filter(|(.., health)| !health.is_some_and(|h| h.is_dead()))
                .map(|(entity, position, body, collider, enemy, _)| TargetInfo {
                    id: entity.to_bits(),
                    pos: position.pos,
                    vel: body.velocity,
                    radius: collider.radius,
                    priority: enemy.priority,
                }),
        );
    targets.targets.sort_by_key(|t| t.id);
}
