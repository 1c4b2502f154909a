//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [display]
//! width = 1600
//! height = 900
//! target_fps = 60
//!
//! [input]
//! deadzone = 0.2
//!
//! [camera]
//! smoothing = 0.1
//! zoom = 1.0
//! bounds_width = 0
//! bounds_height = 0
//!
//! [player]
//! max_speed = 5.0
//! acceleration = 1.0
//! deceleration = 0.5
//! rotation_speed = 0.15
//! auto_aim_range = 400.0
//! auto_aim = true
//! contact_damage = 1
//! speed_bonus = 0
//!
//! [enemies]
//! count = 16
//! speed = 1.5
//! speed_bonus = 0
//! radius = 15.0
//! spawn_radius = 500.0
//! health = 10
//! ```
//!
//! `speed_bonus` is a percentage applied on top of the base speed.
//!
//! A zero bounds width or height means the camera is unbounded.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::playercontrolled::PlayerConfig;
use crate::math::{Rectangle, Vector2};
use crate::resources::camera2d::CameraConfig;
use crate::resources::input::DEFAULT_DEADZONE;

/// Default safe values for startup
const DEFAULT_VIEWPORT_WIDTH: u32 = 1600;
const DEFAULT_VIEWPORT_HEIGHT: u32 = 900;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CAMERA_SMOOTHING: f64 = 0.1;
const DEFAULT_CAMERA_ZOOM: f64 = 1.0;
const DEFAULT_AUTO_AIM: bool = true;
const DEFAULT_ENEMY_COUNT: usize = 16;
const DEFAULT_ENEMY_SPEED: f64 = 1.5;
const DEFAULT_ENEMY_RADIUS: f64 = 15.0;
const DEFAULT_SPAWN_RADIUS: f64 = 500.0;
const DEFAULT_ENEMY_HEALTH: u32 = 10;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores viewport, input, camera, player and enemy tuning. Values missing
/// from the file keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
    /// Ticks per simulated second.
    pub target_fps: u32,
    /// Analog stick deadzone.
    pub deadzone: f64,
    pub camera_smoothing: f64,
    pub camera_zoom: f64,
    /// World area the camera is confined to, centered on the origin.
    pub camera_bounds: Option<Vector2>,
    pub player: PlayerConfig,
    /// Whether the player starts with auto-aim on.
    pub auto_aim: bool,
    /// Percent bonus on the player's max speed.
    pub player_speed_bonus: f64,
    pub enemy_count: usize,
    pub enemy_speed: f64,
    /// Percent bonus on every enemy's speed.
    pub enemy_speed_bonus: f64,
    pub enemy_health: u32,
    pub enemy_radius: f64,
    /// Distance from the player at which enemies spawn.
    pub spawn_radius: f64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            deadzone: DEFAULT_DEADZONE,
            camera_smoothing: DEFAULT_CAMERA_SMOOTHING,
            camera_zoom: DEFAULT_CAMERA_ZOOM,
            camera_bounds: None,
            player: PlayerConfig::default(),
            auto_aim: DEFAULT_AUTO_AIM,
            player_speed_bonus: 0.0,
            enemy_count: DEFAULT_ENEMY_COUNT,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            enemy_speed_bonus: 0.0,
            enemy_health: DEFAULT_ENEMY_HEALTH,
            enemy_radius: DEFAULT_ENEMY_RADIUS,
            spawn_radius: DEFAULT_SPAWN_RADIUS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        info!("Loaded config from {:?}: {}", self.config_path, self.summary());
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();
        // Values that do not fit in a u32 keep the default.
        let uint32 = |section: &str, key: &str| {
            let value = config.getuint(section, key).ok().flatten()?;
            let fitted = u32::try_from(value).ok();
            if fitted.is_none() {
                warn!("[{section}] {key} = {value} is out of range, keeping default");
            }
            fitted
        };

        // [display] section
        if let Some(width) = uint32("display", "width") {
            self.viewport_width = width;
        }
        if let Some(height) = uint32("display", "height") {
            self.viewport_height = height;
        }
        if let Some(fps) = uint32("display", "target_fps") {
            self.target_fps = fps.max(1);
        }

        // [input] section
        if let Some(deadzone) = float("input", "deadzone") {
            self.deadzone = deadzone;
        }

        // [camera] section
        if let Some(smoothing) = float("camera", "smoothing") {
            self.camera_smoothing = smoothing;
        }
        if let Some(zoom) = float("camera", "zoom") {
            self.camera_zoom = zoom;
        }
        let bounds_width = float("camera", "bounds_width");
        let bounds_height = float("camera", "bounds_height");
        if bounds_width.is_some() || bounds_height.is_some() {
            let w = bounds_width.unwrap_or(0.0);
            let h = bounds_height.unwrap_or(0.0);
            self.camera_bounds = (w > 0.0 && h > 0.0).then(|| Vector2::new(w, h));
        }

        // [player] section
        if let Some(v) = float("player", "max_speed") {
            self.player.max_speed = v;
        }
        if let Some(v) = float("player", "acceleration") {
            self.player.acceleration = v;
        }
        if let Some(v) = float("player", "deceleration") {
            self.player.deceleration = v;
        }
        if let Some(v) = float("player", "rotation_speed") {
            self.player.rotation_speed = v;
        }
        if let Some(v) = float("player", "auto_aim_range") {
            self.player.auto_aim_range = v;
        }
        if let Some(auto_aim) = config.getbool("player", "auto_aim").ok().flatten() {
            self.auto_aim = auto_aim;
        }
        if let Some(damage) = uint32("player", "contact_damage") {
            self.player.contact_damage = damage;
        }
        if let Some(v) = float("player", "speed_bonus") {
            self.player_speed_bonus = v;
        }

        // [enemies] section
        if let Some(count) = config
            .getuint("enemies", "count")
            .ok()
            .flatten()
            .and_then(|c| usize::try_from(c).ok())
        {
            self.enemy_count = count;
        }
        if let Some(v) = float("enemies", "speed") {
            self.enemy_speed = v;
        }
        if let Some(v) = float("enemies", "speed_bonus") {
            self.enemy_speed_bonus = v;
        }
        if let Some(health) = uint32("enemies", "health") {
            self.enemy_health = health;
        }
        if let Some(v) = float("enemies", "radius") {
            self.enemy_radius = v;
        }
        if let Some(v) = float("enemies", "spawn_radius") {
            self.spawn_radius = v;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [display] section
        config.set("display", "width", Some(self.viewport_width.to_string()));
        config.set("display", "height", Some(self.viewport_height.to_string()));
        config.set("display", "target_fps", Some(self.target_fps.to_string()));

        // [input] section
        config.set("input", "deadzone", Some(self.deadzone.to_string()));

        // [camera] section
        let bounds = self.camera_bounds.unwrap_or(Vector2::ZERO);
        config.set("camera", "smoothing", Some(self.camera_smoothing.to_string()));
        config.set("camera", "zoom", Some(self.camera_zoom.to_string()));
        config.set("camera", "bounds_width", Some(bounds.x.to_string()));
        config.set("camera", "bounds_height", Some(bounds.y.to_string()));

        // [player] section
        config.set("player", "max_speed", Some(self.player.max_speed.to_string()));
        config.set("player", "acceleration", Some(self.player.acceleration.to_string()));
        config.set("player", "deceleration", Some(self.player.deceleration.to_string()));
        config.set("player", "rotation_speed", Some(self.player.rotation_speed.to_string()));
        config.set("player", "auto_aim_range", Some(self.player.auto_aim_range.to_string()));
        config.set("player", "auto_aim", Some(self.auto_aim.to_string()));
        config.set("player", "contact_damage", Some(self.player.contact_damage.to_string()));
        config.set("player", "speed_bonus", Some(self.player_speed_bonus.to_string()));

        // [enemies] section
        config.set("enemies", "count", Some(self.enemy_count.to_string()));
        config.set("enemies", "speed", Some(self.enemy_speed.to_string()));
        config.set("enemies", "speed_bonus", Some(self.enemy_speed_bonus.to_string()));
        config.set("enemies", "health", Some(self.enemy_health.to_string()));
        config.set("enemies", "radius", Some(self.enemy_radius.to_string()));
        config.set("enemies", "spawn_radius", Some(self.spawn_radius.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set viewport size.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Get the viewport size.
    pub fn viewport_size(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Camera settings derived from this configuration.
    pub fn camera_config(&self) -> CameraConfig {
        let mut camera = CameraConfig::default()
            .with_smoothing(self.camera_smoothing)
            .with_viewport_size(f64::from(self.viewport_width), f64::from(self.viewport_height));
        if let Some(size) = self.camera_bounds {
            camera = camera.with_bounds(Rectangle::centered(Vector2::ZERO, size));
        }
        camera
    }

    /// Simulated seconds per tick.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    fn summary(&self) -> String {
        format!(
            "{}x{} viewport, fps={}, deadzone={}, player max_speed={}, {} enemies",
            self.viewport_width,
            self.viewport_height,
            self.target_fps,
            self.deadzone,
            self.player.max_speed,
            self.enemy_count
        )
    }
}
