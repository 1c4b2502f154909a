//! Shared 2D camera resource.
//!
//! [`Camera2D`] owns the current view of the world: a focus position, an
//! optional follow target with exponential smoothing, zoom, rotation and
//! optional world bounds. It provides the affine mapping between world and
//! screen coordinates and the visible world rectangle used for culling.
//!
//! The world→screen transform is, in order: translate by `-position`, rotate
//! by `-rotation`, scale by `zoom`, translate to the screen center.
//! [`Camera2D::screen_to_world`] applies the exact inverse, so the two round
//! trip up to floating-point error for any `zoom > 0` and any rotation.

use bevy_ecs::prelude::Resource;
use log::warn;

use crate::math::{Rectangle, Vector2};

/// Smallest zoom the camera accepts. Lower requests are clamped to this.
pub const MIN_ZOOM: f64 = 0.1;

const DEFAULT_SMOOTHING: f64 = 0.1;
const DEFAULT_VIEWPORT_WIDTH: f64 = 1600.0;
const DEFAULT_VIEWPORT_HEIGHT: f64 = 900.0;

/// Read-only camera capability consumed by input and rendering code.
pub trait CameraView {
    fn world_to_screen(&self, world: Vector2) -> Vector2;
    fn screen_to_world(&self, screen: Vector2) -> Vector2;
    /// World-space rectangle currently visible.
    fn viewport(&self) -> Rectangle;
    fn zoom(&self) -> f64;
}

/// Camera tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Fraction of the remaining distance covered per tick, in `(0, 1]`.
    pub smoothing: f64,
    /// Region in camera-local coordinates (relative to the camera position)
    /// inside which a target does not move the camera. A zero-area
    /// rectangle disables it.
    pub deadzone: Rectangle,
    /// World area the viewport must stay inside.
    pub bounds: Option<Rectangle>,
    /// Viewport size in screen pixels.
    pub viewport_size: Vector2,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            deadzone: Rectangle::default(),
            bounds: None,
            viewport_size: Vector2::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        }
    }
}

impl CameraConfig {
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = sanitize_smoothing(smoothing);
        self
    }

    pub fn with_bounds(mut self, bounds: Rectangle) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_viewport_size(mut self, width: f64, height: f64) -> Self {
        self.viewport_size = Vector2::new(width.max(0.0), height.max(0.0));
        self
    }

    /// Deadzone of the given size centered on the camera position.
    pub fn with_deadzone(mut self, width: f64, height: f64) -> Self {
        self.deadzone = Rectangle::centered(Vector2::ZERO, Vector2::new(width.max(0.0), height.max(0.0)));
        self
    }
}

fn sanitize_smoothing(smoothing: f64) -> f64 {
    if smoothing.is_nan() {
        DEFAULT_SMOOTHING
    } else {
        smoothing.clamp(f64::EPSILON, 1.0)
    }
}

/// ECS resource that holds the active 2D camera.
///
/// Inserted once at scene start, re-targeted by the follow system every tick
/// and read by anything that needs world/screen conversions.
#[derive(Resource, Debug, Clone)]
pub struct Camera2D {
    /// Focus point in world coordinates (center of the view).
    position: Vector2,
    target: Option<Vector2>,
    config: CameraConfig,
    zoom: f64,
    /// Radians.
    rotation: f64,
    visible_area: Rectangle,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera2D {
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    pub fn with_config(mut config: CameraConfig) -> Self {
        config.smoothing = sanitize_smoothing(config.smoothing);
        config.viewport_size = Vector2::new(config.viewport_size.x.max(0.0), config.viewport_size.y.max(0.0));
        let mut camera = Self {
            position: Vector2::ZERO,
            target: None,
            config,
            zoom: 1.0,
            rotation: 0.0,
            visible_area: Rectangle::default(),
        };
        camera.update_visible_area();
        camera
    }

    /// Advance one tick: ease toward the target, clamp to bounds, refresh the viewport.
    ///
    /// Without a target the camera stays where it is.
    pub fn update(&mut self) {
        let Some(target) = self.target else {
            return;
        };

        let offset = target - self.position;
        if !self.in_deadzone(offset) {
            self.position += offset * self.config.smoothing;
        }

        self.clamp_to_bounds();
        self.update_visible_area();
    }

    fn in_deadzone(&self, offset: Vector2) -> bool {
        let dz = &self.config.deadzone;
        dz.size.x > 0.0 && dz.size.y > 0.0 && dz.contains(offset)
    }

    fn half_extents(&self) -> Vector2 {
        self.config.viewport_size / (2.0 * self.zoom)
    }

    fn update_visible_area(&mut self) {
        let half = self.half_extents();
        self.visible_area = Rectangle {
            pos: self.position - half,
            size: half * 2.0,
        };
    }

    /// Keep the viewport inside the bounds; center on any axis where it cannot fit.
    fn clamp_to_bounds(&mut self) {
        let Some(bounds) = self.config.bounds else {
            return;
        };
        let half = self.half_extents();

        if half.x * 2.0 > bounds.size.x {
            self.position.x = bounds.pos.x + bounds.size.x / 2.0;
        } else {
            let min_x = bounds.pos.x + half.x;
            let max_x = bounds.pos.x + bounds.size.x - half.x;
            self.position.x = self.position.x.min(max_x).max(min_x);
        }

        if half.y * 2.0 > bounds.size.y {
            self.position.y = bounds.pos.y + bounds.size.y / 2.0;
        } else {
            let min_y = bounds.pos.y + half.y;
            let max_y = bounds.pos.y + bounds.size.y - half.y;
            self.position.y = self.position.y.min(max_y).max(min_y);
        }
    }

    /// Follow a world point. Pass `None` to stop following.
    pub fn set_target(&mut self, target: Option<Vector2>) {
        self.target = target;
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<Vector2> {
        self.target
    }

    /// Jump to a position immediately (still clamped to bounds).
    pub fn set_center(&mut self, position: Vector2) {
        self.position = position;
        self.clamp_to_bounds();
        self.update_visible_area();
    }

    pub fn center(&self) -> Vector2 {
        self.position
    }

    /// Set the zoom, clamped to at least [`MIN_ZOOM`]. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            warn!("Ignoring non-finite camera zoom {zoom}");
            return;
        }
        self.zoom = zoom.max(MIN_ZOOM);
        self.clamp_to_bounds();
        self.update_visible_area();
    }

    /// Set the rotation in radians. Non-finite values are ignored.
    pub fn set_rotation(&mut self, radians: f64) {
        if !radians.is_finite() {
            warn!("Ignoring non-finite camera rotation {radians}");
            return;
        }
        self.rotation = radians;
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_smoothing(&mut self, smoothing: f64) {
        self.config.smoothing = sanitize_smoothing(smoothing);
    }

    pub fn smoothing(&self) -> f64 {
        self.config.smoothing
    }

    pub fn set_bounds(&mut self, bounds: Option<Rectangle>) {
        self.config.bounds = bounds;
        self.clamp_to_bounds();
        self.update_visible_area();
    }

    pub fn bounds(&self) -> Option<Rectangle> {
        self.config.bounds
    }

    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.config.viewport_size = Vector2::new(width.max(0.0), height.max(0.0));
        self.clamp_to_bounds();
        self.update_visible_area();
    }

    pub fn viewport_size(&self) -> Vector2 {
        self.config.viewport_size
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    fn screen_center(&self) -> Vector2 {
        self.config.viewport_size * 0.5
    }

    /// Inclusive tile index range covering the viewport: `(min_x, min_y, max_x, max_y)`.
    pub fn visible_tiles(&self, tile_size: u32) -> (i32, i32, i32, i32) {
        let tile = f64::from(tile_size.max(1));
        let area = &self.visible_area;
        (
            (area.left() / tile).floor() as i32,
            (area.top() / tile).floor() as i32,
            (area.right() / tile).ceil() as i32,
            (area.bottom() / tile).ceil() as i32,
        )
    }

    /// Whether a world rectangle overlaps the visible area.
    pub fn is_rect_visible(&self, rect: &Rectangle) -> bool {
        self.visible_area.intersects(rect)
    }
}

impl CameraView for Camera2D {
    fn world_to_screen(&self, world: Vector2) -> Vector2 {
        (world - self.position).rotate(-self.rotation) * self.zoom + self.screen_center()
    }

    fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        ((screen - self.screen_center()) / self.zoom).rotate(self.rotation) + self.position
    }

    fn viewport(&self) -> Rectangle {
        self.visible_area
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }
}
