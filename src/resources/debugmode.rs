//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug diagnostics
//! should be enabled. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, systems may log extra per-tick detail.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DebugMode {}
