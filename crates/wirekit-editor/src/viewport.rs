//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and world
//! coordinates (circuit space). Manages zoom and pan with proper coordinate
//! mapping so the world point under the cursor stays fixed while zooming.

use std::fmt;

use wirekit_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use wirekit_core::Point;

/// The canvas element's placement in the host window, measured at event
/// time. Passing a fresh frame with every pointer event (rather than
/// caching one) keeps transforms correct across window resizes and layout
/// shifts without an invalidation protocol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    /// Top-left corner of the canvas in window coordinates.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl CanvasFrame {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// A frame at the window origin, for tests and headless use.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(Point::default(), width, height)
    }
}

/// Direction of a discrete zoom step, typically from a wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Represents the viewport transformation state (zoom and pan).
///
/// Screen and world both run +Y down, so the mapping is a pure
/// scale-then-translate with no axis flip:
///
/// ```text
/// screen = world * scale + pan + frame.origin
/// world  = (screen - frame.origin - pan) / scale
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Gets the current zoom scale (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts a window-space pixel position to world coordinates.
    pub fn to_world(&self, frame: &CanvasFrame, screen: Point) -> Point {
        Point::new(
            (screen.x - frame.origin.x - self.pan_x) / self.scale,
            (screen.y - frame.origin.y - self.pan_y) / self.scale,
        )
    }

    /// Converts world coordinates to a window-space pixel position.
    pub fn to_screen(&self, frame: &CanvasFrame, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.pan_x + frame.origin.x,
            world.y * self.scale + self.pan_y + frame.origin.y,
        )
    }

    /// Zooms to a new scale while keeping `world_anchor` at the same
    /// window position.
    ///
    /// Solves the mapping for the pan that keeps the anchor fixed:
    /// `screen = world * scale + pan + origin` with `screen` and `world`
    /// held constant gives `pan = screen - origin - world * new_scale`.
    pub fn zoom_to_point(&mut self, frame: &CanvasFrame, world_anchor: Point, new_scale: f64) {
        let new_scale = new_scale.clamp(MIN_ZOOM, MAX_ZOOM);
        let screen = self.to_screen(frame, world_anchor);
        self.scale = new_scale;
        self.pan_x = screen.x - frame.origin.x - world_anchor.x * new_scale;
        self.pan_y = screen.y - frame.origin.y - world_anchor.y * new_scale;
    }

    /// Applies one discrete zoom step anchored at a window-space cursor
    /// position.
    pub fn zoom_at(&mut self, frame: &CanvasFrame, cursor: Point, direction: ZoomDirection) {
        let anchor = self.to_world(frame, cursor);
        let new_scale = match direction {
            ZoomDirection::In => self.scale * ZOOM_STEP,
            ZoomDirection::Out => self.scale / ZOOM_STEP,
        };
        self.zoom_to_point(frame, anchor, new_scale);
    }

    /// Centers the viewport on a world coordinate.
    pub fn center_on(&mut self, frame: &CanvasFrame, world: Point) {
        self.pan_x = frame.width / 2.0 - world.x * self.scale;
        self.pan_y = frame.height / 2.0 - world.y * self.scale;
    }

    /// The world-space rectangle currently visible, as
    /// `(min_x, min_y, max_x, max_y)`.
    pub fn visible_bounds(&self, frame: &CanvasFrame) -> (f64, f64, f64, f64) {
        let min = self.to_world(frame, frame.origin);
        let max = self.to_world(
            frame,
            Point::new(frame.origin.x + frame.width, frame.origin.y + frame.height),
        );
        (min.x, min.y, max.x, max.y)
    }

    /// Resets to identity (1:1 scale, no pan).
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.pan_x, self.pan_y
        )
    }
}
