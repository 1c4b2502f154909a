//! novampires simulation core.
//!
//! This crate exposes the ECS components, resources, systems, and events of a
//! top-down survival game core: input abstraction, player motion and aim,
//! enemy steering, and the 2D camera. Rendering is left to the host.

pub mod components;
pub mod events;
pub mod game;
pub mod math;
pub mod resources;
pub mod systems;
