use bevy_ecs::prelude::Component;

/// Hit points of a damageable entity.
///
/// `current` never goes below zero; an entity at zero is dead and is
/// despawned by [`player_contact_damage`](crate::systems::contact::player_contact_damage).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub max: u32,
    pub current: u32,
}

impl Health {
    /// Full health.
    pub fn new(max: u32) -> Self {
        Self { max, current: max }
    }

    /// Subtract `amount`. Returns `true` when this hit killed the entity.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        let was_alive = !self.is_dead();
        self.current = self.current.saturating_sub(amount);
        was_alive && self.is_dead()
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Remaining health in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(self.current) / f64::from(self.max)
        }
    }
}
