//! Whole-scene tests: `setup_world` plus the full update schedule.

use bevy_ecs::prelude::*;

use novampires::components::enemy::Enemy;
use novampires::components::health::Health;
use novampires::components::mapposition::MapPosition;
use novampires::components::playercontrolled::PlayerControlled;
use novampires::game::{Autopilot, build_update_schedule, setup_world, tick};
use novampires::math::Vector2;
use novampires::resources::camera2d::Camera2D;
use novampires::resources::gameconfig::GameConfig;
use novampires::resources::playersnapshot::{PlayerSnapshot, PlayerState};
use novampires::resources::rawinput::RawInput;
use novampires::resources::targets::NearbyTargets;
use novampires::resources::worldtime::WorldTime;

const DT: f32 = 1.0 / 60.0;

fn make_scene(seed: u64) -> (World, Schedule, Entity) {
    let mut world = World::new();
    let player = setup_world(&mut world, GameConfig::new(), seed);
    (world, build_update_schedule(), player)
}

fn run_autopilot(world: &mut World, schedule: &mut Schedule, ticks: u64) {
    let viewport = world.resource::<GameConfig>().viewport_size();
    let pilot = Autopilot::new(viewport).with_toggle_every(50);
    for frame in 0..ticks {
        pilot.drive(&mut world.resource_mut::<RawInput>(), frame);
        tick(world, schedule, DT);
    }
}

fn enemy_positions(world: &mut World) -> Vec<(Entity, Vector2)> {
    let mut query = world.query_filtered::<(Entity, &MapPosition), With<Enemy>>();
    let mut out: Vec<_> = query.iter(world).map(|(e, p)| (e, p.pos)).collect();
    out.sort_by_key(|(e, _)| e.to_bits());
    out
}

#[test]
fn setup_spawns_player_and_enemy_ring() {
    let (mut world, _, player) = make_scene(7);

    assert!(world.get::<PlayerControlled>(player).is_some());
    let enemies = enemy_positions(&mut world);
    assert_eq!(enemies.len(), 16);
    for (_, pos) in enemies {
        assert!((pos.magnitude() - 500.0).abs() < 1e-6);
    }
    let mut query = world.query::<(&Enemy, &Health)>();
    let priorities: Vec<f64> = query.iter(&world).map(|(e, _)| e.priority).collect();
    assert!(priorities.iter().all(|p| [0.0, 1.0, 2.0].contains(p)));
    assert!(query.iter(&world).all(|(_, h)| *h == Health::new(10)));
    assert!(world.get_resource::<Camera2D>().is_some());
    assert!(world.resource::<NearbyTargets>().is_empty());
}

#[test]
fn same_seed_and_script_replay_identically() {
    let (mut a, mut schedule_a, _) = make_scene(42);
    let (mut b, mut schedule_b, _) = make_scene(42);

    run_autopilot(&mut a, &mut schedule_a, 180);
    run_autopilot(&mut b, &mut schedule_b, 180);

    assert_eq!(*a.resource::<PlayerSnapshot>(), *b.resource::<PlayerSnapshot>());
    assert_eq!(
        a.resource::<NearbyTargets>().as_slice(),
        b.resource::<NearbyTargets>().as_slice()
    );
    let pa: Vec<_> = enemy_positions(&mut a).into_iter().map(|(_, p)| p).collect();
    let pb: Vec<_> = enemy_positions(&mut b).into_iter().map(|(_, p)| p).collect();
    assert_eq!(pa, pb);
}

#[test]
fn different_seeds_place_enemies_differently() {
    let (mut a, _, _) = make_scene(1);
    let (mut b, _, _) = make_scene(2);
    let pa: Vec<_> = enemy_positions(&mut a).into_iter().map(|(_, p)| p).collect();
    let pb: Vec<_> = enemy_positions(&mut b).into_iter().map(|(_, p)| p).collect();
    assert_ne!(pa, pb);
}

#[test]
fn enemies_close_in_on_idle_player() {
    let (mut world, mut schedule, _) = make_scene(3);
    for _ in 0..100 {
        tick(&mut world, &mut schedule, DT);
    }

    let enemies = enemy_positions(&mut world);
    let mean = enemies.iter().map(|(_, p)| p.magnitude()).sum::<f64>() / enemies.len() as f64;
    assert!(mean < 450.0, "mean distance {mean}");
    assert_eq!(world.resource::<NearbyTargets>().len(), 16);
}

#[test]
fn enemies_reaching_the_player_are_defeated() {
    let (mut world, mut schedule, _) = make_scene(21);
    for _ in 0..600 {
        tick(&mut world, &mut schedule, DT);
    }

    let remaining = enemy_positions(&mut world).len();
    assert!(remaining < 16, "{remaining} enemies left");
    assert_eq!(world.resource::<NearbyTargets>().len(), remaining);
}

#[test]
fn snapshot_tracks_player_and_frame_count() {
    let (mut world, mut schedule, player) = make_scene(5);
    run_autopilot(&mut world, &mut schedule, 120);

    let pos = world.get::<MapPosition>(player).unwrap().pos;
    let snapshot = *world.resource::<PlayerSnapshot>();
    assert_eq!(snapshot.position(), pos);
    assert_eq!(snapshot.frame, 120);
    assert_eq!(world.resource::<WorldTime>().frame_count, 120);
    assert!(snapshot.using_gamepad());
    assert!(pos.magnitude() > 10.0);
}

#[test]
fn camera_trails_the_player() {
    let (mut world, mut schedule, player) = make_scene(9);
    run_autopilot(&mut world, &mut schedule, 300);

    let pos = world.get::<MapPosition>(player).unwrap().pos;
    let camera = world.resource::<Camera2D>();
    assert_eq!(camera.target(), Some(pos));
    assert!(camera.center().distance(pos) < 100.0);
}

#[test]
fn teleported_player_is_retargeted() {
    let (mut world, mut schedule, player) = make_scene(13);
    world
        .get_mut::<MapPosition>(player)
        .unwrap()
        .set_position(Vector2::new(2000.0, 0.0));
    tick(&mut world, &mut schedule, DT);

    assert_eq!(
        world.resource::<Camera2D>().target(),
        Some(Vector2::new(2000.0, 0.0))
    );
    assert_eq!(
        world.resource::<PlayerSnapshot>().position(),
        Vector2::new(2000.0, 0.0)
    );
}

#[test]
fn snapshot_serializes_to_json() {
    let (mut world, mut schedule, _) = make_scene(11);
    run_autopilot(&mut world, &mut schedule, 10);

    let snapshot = *world.resource::<PlayerSnapshot>();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"frame\":10"));
    let back: PlayerSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.frame, snapshot.frame);
    assert!(back.position().distance(snapshot.position()) < 1e-9);
    assert_eq!(back.is_auto_aim_enabled(), snapshot.is_auto_aim_enabled());
}
