//! Event types and observers.
//!
//! Submodules:
//! - [`enemydefeated`] – an enemy's health reached zero
//! - [`input`] – logical actions and their press/release notifications
//! - [`switchdebug`] – toggle debug diagnostics on/off
pub mod enemydefeated;
pub mod input;
pub mod switchdebug;
