//! Enemy defeat notification.
//!
//! [`player_contact_damage`](crate::systems::contact::player_contact_damage)
//! triggers an [`EnemyDefeatedEvent`] for each enemy whose health reaches zero,
//! right before despawning it. Observers can count kills or spawn
//! replacements without touching the contact system.
use bevy_ecs::prelude::*;

use crate::math::Vector2;

#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyDefeatedEvent {
    pub entity: Entity,
    /// Where the enemy stood when it died.
    pub position: Vector2,
}
