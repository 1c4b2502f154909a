use bevy_ecs::prelude::Resource;

/// Simulation clock advanced once per tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn delta_seconds(&self) -> f32 {
        self.delta * self.time_scale
    }

    /// Advance by one tick of `dt` unscaled seconds.
    pub fn advance(&mut self, dt: f32) {
        self.delta = dt;
        self.elapsed += self.delta_seconds();
        self.frame_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_applies_time_scale() {
        let mut time = WorldTime {
            time_scale: 0.5,
            ..Default::default()
        };
        time.advance(0.1);
        time.advance(0.1);
        assert!((time.elapsed - 0.1).abs() < 1e-6);
        assert_eq!(time.frame_count, 2);
        assert!((time.delta - 0.1).abs() < 1e-6);
    }
}
