//! novampires headless driver.
//!
//! Runs the simulation core without a window:
//! - **bevy_ecs** world and a single chained schedule per tick
//! - scripted input from [`Autopilot`](novampires::game::Autopilot)
//! - **configparser** INI settings, **clap** command line, **env_logger** output
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --ticks 1200 --seed 7 --json
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use clap::Parser;
use log::{info, warn};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use novampires::components::playercontrolled::direction_label;
use novampires::events::enemydefeated::EnemyDefeatedEvent;
use novampires::game::{Autopilot, build_update_schedule, setup_world, tick};
use novampires::resources::camera2d::{Camera2D, CameraView};
use novampires::resources::gameconfig::GameConfig;
use novampires::resources::playersnapshot::PlayerSnapshot;
use novampires::resources::rawinput::RawInput;
use novampires::resources::targets::NearbyTargets;
use novampires::resources::worldtime::WorldTime;

/// Headless vampire-survivors-like simulation core
#[derive(Parser)]
#[command(version, about = "Runs the novampires simulation headless with scripted input.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Seed for enemy placement.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Override the configured enemy count.
    #[arg(long)]
    enemies: Option<usize>,

    /// Log a progress line every N ticks (0 disables).
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Print the final player snapshot as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }
    if let Some(count) = cli.enemies {
        config.enemy_count = count;
    }

    let dt = config.tick_seconds();
    let pilot = Autopilot::new(config.viewport_size());

    let mut world = World::new();
    setup_world(&mut world, config, cli.seed);
    let mut update = build_update_schedule();

    let defeated = Arc::new(AtomicU64::new(0));
    let counter = defeated.clone();
    world.add_observer(move |_trigger: On<EnemyDefeatedEvent>| {
        counter.fetch_add(1, Ordering::Relaxed);
    });
    world.flush();

    info!("Simulating {} ticks", cli.ticks);
    for frame in 0..cli.ticks {
        pilot.drive(&mut world.resource_mut::<RawInput>(), frame);
        tick(&mut world, &mut update, dt);

        if cli.report_every > 0 && (frame + 1) % cli.report_every == 0 {
            report(&world);
        }
    }

    let snapshot = *world.resource::<PlayerSnapshot>();
    if cli.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to serialize snapshot: {e}");
                std::process::exit(1);
            }
        }
    }
    info!(
        "Finished after {:.1}s simulated, {} enemies defeated",
        world.resource::<WorldTime>().elapsed,
        defeated.load(Ordering::Relaxed)
    );
}

fn report(world: &World) {
    let snapshot = world.resource::<PlayerSnapshot>();
    let camera = world.resource::<Camera2D>();
    let targets = world.resource::<NearbyTargets>();
    let in_view = targets
        .as_slice()
        .iter()
        .filter(|t| camera.viewport().contains(t.pos))
        .count();
    info!(
        "tick {:>5}: player {} facing {} ({:.0} deg), auto-aim {}, {} targets ({} in view)",
        snapshot.frame,
        snapshot.position,
        direction_label(snapshot.rotation),
        snapshot.rotation.to_degrees(),
        if snapshot.auto_aim_enabled { "on" } else { "off" },
        targets.len(),
        in_view
    );
}
