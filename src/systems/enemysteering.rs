//! Enemy steering and separation systems.
//!
//! [`enemy_steering`] sets each enemy's velocity from its behaviour and the
//! player's position for this tick. After movement, [`enemy_separation`]
//! pushes overlapping enemies apart in a single pairwise pass.

use bevy_ecs::prelude::*;

use crate::components::circlecollider::CircleCollider;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::rigidbody::RigidBody;
use crate::math::Vector2;

pub fn enemy_steering(
    player: Query<&MapPosition, With<PlayerControlled>>,
    mut enemies: Query<(&mut Enemy, &MapPosition, &mut RigidBody), Without<PlayerControlled>>,
) {
    let Some(target) = player.iter().next().map(|p| p.pos) else {
        for (_, _, mut rigidbody) in enemies.iter_mut() {
            rigidbody.velocity = Vector2::ZERO;
        }
        return;
    };

    for (mut enemy, position, mut rigidbody) in enemies.iter_mut() {
        let speed = enemy.speed.value();
        rigidbody.velocity = enemy.steering.velocity(position.pos, target, speed);
    }
}

/// Push `a` and `b` apart by half their overlap each.
///
/// Returns the displacement to add to `a` (subtract it from `b`), or `None`
/// when the circles do not overlap. Coincident centers separate along +x.
pub fn separation_push(
    a: Vector2,
    a_collider: &CircleCollider,
    b: Vector2,
    b_collider: &CircleCollider,
) -> Option<Vector2> {
    let overlap = a_collider.overlap(a, b_collider, b)?;
    let axis = a - b;
    let axis = if axis.is_zero() {
        Vector2::new(1.0, 0.0)
    } else {
        axis.normalized()
    };
    Some(axis * (overlap / 2.0))
}

pub fn enemy_separation(mut query: Query<(&mut MapPosition, &CircleCollider), With<Enemy>>) {
    let mut combos = query.iter_combinations_mut();
    while let Some([(mut position_a, collider_a), (mut position_b, collider_b)]) =
        combos.fetch_next()
    {
        if let Some(push) = separation_push(position_a.pos, collider_a, position_b.pos, collider_b)
        {
            position_a.pos += push;
            position_b.pos -= push;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_is_half_overlap_each() {
        let c = CircleCollider::new(15.0);
        let push = separation_push(Vector2::new(10.0, 0.0), &c, Vector2::ZERO, &c).unwrap();
        assert_eq!(push, Vector2::new(10.0, 0.0));
    }

    #[test]
    fn test_separated_pair_untouched() {
        let c = CircleCollider::new(15.0);
        assert!(separation_push(Vector2::new(31.0, 0.0), &c, Vector2::ZERO, &c).is_none());
    }

    #[test]
    fn test_coincident_centers_use_fixed_axis() {
        let c = CircleCollider::new(5.0);
        let push = separation_push(Vector2::new(2.0, 2.0), &c, Vector2::new(2.0, 2.0), &c).unwrap();
        assert_eq!(push, Vector2::new(5.0, 0.0));
    }
}
