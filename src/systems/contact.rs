//! Player contact damage.
//!
//! Every tick each enemy whose [`CircleCollider`] overlaps the player's loses
//! `contact_damage` health. Enemies that reach zero trigger an
//! [`EnemyDefeatedEvent`] and are despawned, so they drop out of the target
//! list collected later in the same tick.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::circlecollider::CircleCollider;
use crate::components::enemy::Enemy;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::playercontrolled::PlayerControlled;
use crate::events::enemydefeated::EnemyDefeatedEvent;

pub fn player_contact_damage(
    player: Query<(&PlayerControlled, &MapPosition, &CircleCollider)>,
    mut enemies: Query<
        (Entity, &MapPosition, &CircleCollider, &mut Health),
        (With<Enemy>, Without<PlayerControlled>),
    >,
    mut commands: Commands,
) {
    let Some((controller, player_pos, player_collider)) = player.iter().next() else {
        return;
    };
    let damage = controller.config.contact_damage;

    for (entity, position, collider, mut health) in enemies.iter_mut() {
        if health.is_dead() {
            commands.entity(entity).try_despawn();
            continue;
        }
        if player_collider
            .overlap(player_pos.pos, collider, position.pos)
            .is_none()
        {
            continue;
        }
        if health.take_damage(damage) {
            debug!("Enemy {:?} defeated at {}", entity, position.pos);
            commands.trigger(EnemyDefeatedEvent {
                entity,
                position: position.pos,
            });
            commands.entity(entity).try_despawn();
        } else {
            debug!("Enemy {:?} hit, {}/{} health", entity, health.current, health.max);
        }
    }
}
