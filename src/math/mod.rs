//! Geometry primitives shared by every system.
//!
//! - [`vector2`] – 2D vector value type and algebra
//! - [`rectangle`] – axis-aligned rectangle with containment/intersection tests
//! - [`angle`] – angle wrapping into `(-π, π]`

pub mod angle;
pub mod rectangle;
pub mod vector2;

pub use angle::{angle_delta, normalize_angle};
pub use rectangle::Rectangle;
pub use vector2::Vector2;
