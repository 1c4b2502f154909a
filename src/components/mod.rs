//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`cameratarget`] – marker for the entity the camera follows
//! - [`circlecollider`] – circular body for separation and target radius
//! - [`enemy`] – enemy speed and steering behaviour
//! - [`health`] – hit points of damageable entities
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`playercontrolled`] – player tuning, auto-aim state and aim memory
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`rotation`] – facing angle in radians
//! - [`stat`] – base value with a percentage bonus

pub mod cameratarget;
pub mod circlecollider;
pub mod enemy;
pub mod health;
pub mod mapposition;
pub mod playercontrolled;
pub mod rigidbody;
pub mod rotation;
pub mod stat;
