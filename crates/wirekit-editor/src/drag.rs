//! Component drag gesture.
//!
//! Holds the live position for the component being moved. The store is not
//! touched while the pointer moves; the facade commits the final position
//! exactly once when the gesture ends. Live state exists only between
//! `begin` and `end`/`cancel`.

use tracing::{debug, warn};

use wirekit_core::{Point, Size};

#[derive(Debug, Clone)]
struct DragState {
    instance_id: String,
    /// Cursor-to-origin offset captured at press, in world units. Keeps the
    /// grab point under the cursor instead of snapping the origin to it.
    offset: Point,
    dims: Size,
    live: Point,
}

/// Tracks at most one in-flight component drag.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: Option<DragState>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Starts a drag of `instance_id` grabbed at `world_cursor`.
    ///
    /// Returns false without side effects when a drag is already in flight.
    pub fn begin(
        &mut self,
        instance_id: &str,
        position: Point,
        dims: Size,
        world_cursor: Point,
    ) -> bool {
        if self.state.is_some() {
            warn!(instance_id, "drag begin ignored, another drag is in flight");
            return false;
        }
        debug!(instance_id, %position, "drag begin");
        self.state = Some(DragState {
            instance_id: instance_id.to_string(),
            offset: Point::new(world_cursor.x - position.x, world_cursor.y - position.y),
            dims,
            live: position,
        });
        true
    }

    /// Recomputes the live position from the cursor, clamped so the housing
    /// stays inside the visible world rect `(min_x, min_y, max_x, max_y)`.
    pub fn update(&mut self, world_cursor: Point, visible: (f64, f64, f64, f64)) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let (min_x, min_y, max_x, max_y) = visible;
        let x = world_cursor.x - state.offset.x;
        let y = world_cursor.y - state.offset.y;
        // The upper clamp can fall below the lower one when the component is
        // larger than the view; the lower bound wins.
        state.live = Point::new(
            x.min(max_x - state.dims.width).max(min_x),
            y.min(max_y - state.dims.height).max(min_y),
        );
    }

    /// Live position for the dragged component, if `instance_id` is the one
    /// in flight. The render layer draws from this instead of the store.
    pub fn live_position(&self, instance_id: &str) -> Option<Point> {
        self.state
            .as_ref()
            .filter(|s| s.instance_id == instance_id)
            .map(|s| s.live)
    }

    /// Ends the gesture, yielding `(instance_id, final_position)` for the
    /// caller to commit. Returns `None` when no drag was in flight.
    pub fn end(&mut self) -> Option<(String, Point)> {
        let state = self.state.take()?;
        debug!(instance_id = %state.instance_id, position = %state.live, "drag end");
        Some((state.instance_id, state.live))
    }

    /// Drops the gesture without committing.
    pub fn cancel(&mut self) {
        if let Some(state) = self.state.take() {
            debug!(instance_id = %state.instance_id, "drag cancelled");
        }
    }
}
