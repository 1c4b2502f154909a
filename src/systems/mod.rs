//! Simulation systems.
//!
//! Submodules overview
//! - [`bindingeditor`] – open/close the binding editor and complete captures
//! - [`camera`] – follow the camera target and advance the camera
//! - [`contact`] – player contact damage and enemy defeat
//! - [`enemysteering`] – enemy velocities and pairwise separation
//! - [`input`] – turn raw device state into [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities
//! - [`playercontroller`] – player movement, aim and snapshot publication
//! - [`targets`] – rebuild the nearby target list
//! - [`time`] – advance simulation time

pub mod bindingeditor;
pub mod camera;
pub mod contact;
pub mod enemysteering;
pub mod input;
pub mod movement;
pub mod playercontroller;
pub mod targets;
pub mod time;
