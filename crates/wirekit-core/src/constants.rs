//! Shared layout and interaction constants.
//!
//! Dimension templates and port-layout spacing are consumed by the editor
//! crate's geometry module; the zoom limits are consumed by the viewport.

/// Width/height templates for the closed set of component kinds, in world
/// units. See `ComponentKind::dimensions`.
pub const RESISTOR_SIZE: (f64, f64) = (80.0, 40.0);
pub const CAPACITOR_SIZE: (f64, f64) = (80.0, 40.0);
pub const IC_SIZE: (f64, f64) = (120.0, 90.0);
pub const MODULE_CARD_SIZE: (f64, f64) = (180.0, 70.0);

/// Distance from a housing edge to the first/last port on that edge.
pub const PORT_PADDING: f64 = 10.0;

/// Minimum perpendicular distance between two ports on the same edge.
/// Drives the dynamic-height growth for port-dense modules.
pub const MIN_PORT_SPACING: f64 = 20.0;

/// Zoom clamp range. Scales outside this range produce degenerate or
/// unusable transforms, so the viewport refuses them.
pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 3.0;

/// Multiplicative step applied per wheel notch when zooming.
pub const ZOOM_STEP: f64 = 1.1;
