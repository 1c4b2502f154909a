//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `bindingeditor` – capture state for rebinding keys
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles extra diagnostics
//! - `gameconfig` – INI-backed settings
//! - `input` – per-frame logical action state and the input capability
//! - `inputbinding` – physical input identifiers and the binding table
//! - `playersnapshot` – published player state
//! - `rawinput` – physical device state written by the host
//! - `targets` – aimable targets rebuilt every tick
//! - `worldtime` – simulation time and delta
pub mod bindingeditor;
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod inputbinding;
pub mod playersnapshot;
pub mod rawinput;
pub mod targets;
pub mod worldtime;
