//! Scene setup and the per-tick schedule.
//!
//! [`setup_world`] inserts every resource, registers observers and spawns the
//! player and a ring of enemies. [`build_update_schedule`] returns the frame
//! schedule, chained in the order the simulation depends on:
//!
//! input → binding editor → player movement → player aim → enemy steering →
//! movement → separation → contact damage → target collection → camera
//! follow → snapshot
//!
//! Aim reads the target list collected at the end of the previous tick.

use std::f64::consts::TAU;

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::info;

use crate::components::cameratarget::CameraTarget;
use crate::components::circlecollider::CircleCollider;
use crate::components::enemy::{Enemy, Steering};
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::events::switchdebug::switch_debug_observer;
use crate::math::Vector2;
use crate::resources::bindingeditor::BindingEditor;
use crate::resources::camera2d::Camera2D;
use crate::resources::gameconfig::GameConfig;
use crate::resources::inputbinding::{GamepadAxis, GamepadId, Key};
use crate::resources::input::InputState;
use crate::resources::playersnapshot::PlayerSnapshot;
use crate::resources::rawinput::RawInput;
use crate::resources::targets::NearbyTargets;
use crate::resources::worldtime::WorldTime;
use crate::systems::bindingeditor::binding_editor_system;
use crate::systems::camera::camera_follow;
use crate::systems::contact::player_contact_damage;
use crate::systems::enemysteering::{enemy_separation, enemy_steering};
use crate::systems::input::update_input_state;
use crate::systems::movement::movement_system;
use crate::systems::playercontroller::{player_aim, player_movement, publish_player_snapshot};
use crate::systems::targets::collect_targets;
use crate::systems::time::update_world_time;

/// Radius of the player's body.
const PLAYER_RADIUS: f64 = 20.0;
/// Distance an enemy using the keep-distance behaviour tries to hold.
const KEEP_DISTANCE: f64 = 100.0;

/// Insert resources, register observers and spawn the initial scene.
///
/// Enemy placement and zigzag phases are drawn from a generator seeded with
/// `seed`, so the same seed and input script replay identically.
pub fn setup_world(world: &mut World, config: GameConfig, seed: u64) -> Entity {
    let mut camera = Camera2D::with_config(config.camera_config());
    camera.set_zoom(config.camera_zoom);

    world.insert_resource(WorldTime::default());
    world.insert_resource(RawInput::new());
    world.insert_resource(InputState::default().with_deadzone(config.deadzone));
    world.insert_resource(camera);
    world.insert_resource(NearbyTargets::default());
    world.insert_resource(PlayerSnapshot::default());
    world.insert_resource(BindingEditor::new());

    world.add_observer(switch_debug_observer);

    let player = spawn_player(world, &config);
    let mut rng = Rng::with_seed(seed);
    let enemies = spawn_enemies(world, &config, Vector2::ZERO, &mut rng);
    info!(
        "Scene ready: player {:?}, {} enemies (seed {})",
        player,
        enemies.len(),
        seed
    );

    world.insert_resource(config);
    world.flush();
    player
}

/// Spawn the player at the origin.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> Entity {
    world
        .spawn((
            PlayerControlled::new(config.player)
                .with_speed_bonus(config.player_speed_bonus)
                .with_auto_aim(config.auto_aim),
            MapPosition::default(),
            RigidBody::new(),
            Rotation::default(),
            CircleCollider::new(PLAYER_RADIUS),
            CameraTarget,
        ))
        .id()
}

/// Spawn `config.enemy_count` enemies on a ring of `config.spawn_radius`
/// around `center`, cycling through chase, keep-distance and zigzag.
pub fn spawn_enemies(
    world: &mut World,
    config: &GameConfig,
    center: Vector2,
    rng: &mut Rng,
) -> Vec<Entity> {
    (0..config.enemy_count)
        .map(|i| {
            let angle = rng.f64() * TAU;
            let pos = center + Vector2::from_angle(angle) * config.spawn_radius;
            let (steering, priority) = match i % 3 {
                0 => (Steering::chase(), 0.0),
                1 => (Steering::keep_distance(KEEP_DISTANCE), 1.0),
                _ => (Steering::zigzag(rng.f64() * TAU), 2.0),
            };
            world
                .spawn((
                    Enemy::new(config.enemy_speed, steering)
                        .with_speed_bonus(config.enemy_speed_bonus)
                        .with_priority(priority),
                    Health::new(config.enemy_health),
                    MapPosition::from(pos),
                    RigidBody::new(),
                    CircleCollider::new(config.enemy_radius),
                ))
                .id()
        })
        .collect()
}

/// The per-tick schedule.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            binding_editor_system,
            player_movement,
            player_aim,
            enemy_steering,
            movement_system,
            enemy_separation,
            player_contact_damage,
            collect_targets,
            camera_follow,
            publish_player_snapshot,
        )
            .chain(),
    );
    update
}

/// Advance the world by one tick of `dt` seconds.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

/// Scripted input for headless runs.
///
/// Drives the left stick of a virtual gamepad around a slow circle, sweeps
/// the cursor around the screen center and taps the attack key every
/// `toggle_every` frames, which flips auto-aim.
#[derive(Debug, Clone)]
pub struct Autopilot {
    gamepad: GamepadId,
    /// Radians of stick rotation per frame.
    turn_rate: f64,
    toggle_every: u64,
    screen_center: (i32, i32),
}

impl Autopilot {
    pub fn new(viewport: (u32, u32)) -> Self {
        Self {
            gamepad: 0,
            turn_rate: 0.01,
            toggle_every: 240,
            screen_center: ((viewport.0 / 2) as i32, (viewport.1 / 2) as i32),
        }
    }

    pub fn with_toggle_every(mut self, frames: u64) -> Self {
        self.toggle_every = frames;
        self
    }

    /// Write this frame's scripted device state.
    pub fn drive(&self, raw: &mut RawInput, frame: u64) {
        raw.connect_gamepad(self.gamepad);
        let stick = Vector2::from_angle(frame as f64 * self.turn_rate);
        raw.set_axis(self.gamepad, GamepadAxis::LeftStickHorizontal, stick.x);
        raw.set_axis(self.gamepad, GamepadAxis::LeftStickVertical, stick.y);

        let cursor = Vector2::from_angle(-(frame as f64) * self.turn_rate * 3.0) * 200.0;
        raw.set_cursor(
            self.screen_center.0 + cursor.x as i32,
            self.screen_center.1 + cursor.y as i32,
        );

        let tap = self.toggle_every > 0 && frame > 0 && frame % self.toggle_every == 0;
        raw.set_key(Key::Space, tap);
    }
}
