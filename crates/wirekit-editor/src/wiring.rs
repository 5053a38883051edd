//! Click-to-route orthogonal wiring gesture.
//!
//! A draft starts on a port and accumulates committed bend points one
//! canvas click at a time. Pointer moves update only the live cursor, which
//! drives the dashed preview. Clicking a destination port closes the route,
//! cleans colinear vertices, and yields a commit for the facade to apply to
//! the store. The draft never touches the store itself.

use tracing::debug;

use wirekit_core::{Endpoint, Point, RouteMode};

/// Result of closing a draft on a destination port. `waypoints` excludes
/// the two port positions, which are derivable from the endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct WireCommit {
    pub from: Endpoint,
    pub to: Endpoint,
    pub waypoints: Vec<Point>,
    pub mode: RouteMode,
}

/// Ephemeral state of one in-progress wire route.
#[derive(Debug, Clone)]
pub struct WireDraft {
    start: Endpoint,
    /// Committed path so far, starting at the start port position.
    committed: Vec<Point>,
    cursor: Point,
}

impl WireDraft {
    /// Starts a draft at `start_position`, the start port's pin position.
    pub fn begin(start: Endpoint, start_position: Point) -> Self {
        debug!(instance_id = %start.instance_id, port_id = %start.port_id, "wire draft started");
        Self {
            start,
            committed: vec![start_position],
            cursor: start_position,
        }
    }

    pub fn start(&self) -> &Endpoint {
        &self.start
    }

    /// True when the draft started on a port of `instance_id`.
    pub fn starts_on(&self, instance_id: &str) -> bool {
        self.start.instance_id == instance_id
    }

    pub fn committed_points(&self) -> &[Point] {
        &self.committed
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Updates the live cursor. Never mutates the committed path.
    pub fn set_cursor(&mut self, world: Point) {
        self.cursor = world;
    }

    /// Appends one bend from the last committed point toward `world`,
    /// axis-dominant: a wider horizontal delta bends horizontally to
    /// `(world.x, last.y)`, otherwise vertically to `(last.x, world.y)`.
    /// Ties bend vertically.
    pub fn add_bend(&mut self, world: Point) {
        let last = *self.committed.last().unwrap_or(&world);
        let bend = axis_dominant_bend(last, world);
        self.committed.push(bend);
        self.cursor = world;
    }

    /// The polyline to render as the dashed preview: the committed path
    /// plus the pending bend toward the live cursor.
    pub fn preview_points(&self) -> Vec<Point> {
        let mut points = self.committed.clone();
        if let Some(&last) = points.last() {
            let bend = axis_dominant_bend(last, self.cursor);
            if bend != last && bend != self.cursor {
                points.push(bend);
            }
            if self.cursor != last {
                points.push(self.cursor);
            }
        }
        points
    }

    /// Closes the draft on a destination port.
    ///
    /// Returns `None` when the destination sits on the start component:
    /// that click is the cancel gesture, not an error. This folds the
    /// same-port cancel together with the other start-component ports,
    /// which the store would reject as self-loops anyway; cancelling here
    /// keeps rejected commits out of the store entirely. Otherwise computes
    /// the closing bend with the same axis-dominant rule, appends the
    /// destination pin position, removes redundant colinear vertices, and
    /// yields the commit. A route that never gained an interior bend
    /// commits as `Curved`.
    pub fn close(self, dest: Endpoint, dest_position: Point) -> Option<WireCommit> {
        if dest.instance_id == self.start.instance_id {
            debug!(instance_id = %dest.instance_id, "wire draft cancelled on start component");
            return None;
        }

        let mut path = self.committed;
        let last = *path.last()?;
        if (dest_position.x - last.x).abs() > (dest_position.y - last.y).abs() {
            if last.y != dest_position.y {
                path.push(Point::new(dest_position.x, last.y));
            }
        } else if last.x != dest_position.x {
            path.push(Point::new(last.x, dest_position.y));
        }
        path.push(dest_position);

        let cleaned = simplify_orthogonal(&path);
        // Interior vertices only; the pin positions are derivable.
        let waypoints: Vec<Point> = cleaned[1..cleaned.len() - 1].to_vec();
        let mode = if waypoints.is_empty() {
            RouteMode::Curved
        } else {
            RouteMode::Orthogonal
        };
        debug!(
            from = %self.start.instance_id,
            to = %dest.instance_id,
            waypoints = waypoints.len(),
            "wire draft closed"
        );
        Some(WireCommit {
            from: self.start,
            to: dest,
            waypoints,
            mode,
        })
    }
}

/// Removes interior vertices that lie on the same axis as both neighbors.
/// The first and last points are always kept. Idempotent on cleaned input.
pub fn simplify_orthogonal(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .enumerate()
        .filter(|&(i, p)| {
            if i == 0 || i == points.len() - 1 {
                return true;
            }
            let prev = points[i - 1];
            let next = points[i + 1];
            let redundant =
                (p.x == prev.x && p.x == next.x) || (p.y == prev.y && p.y == next.y);
            !redundant
        })
        .map(|(_, p)| *p)
        .collect()
}

fn axis_dominant_bend(last: Point, toward: Point) -> Point {
    if (toward.x - last.x).abs() > (toward.y - last.y).abs() {
        Point::new(toward.x, last.y)
    } else {
        Point::new(last.x, toward.y)
    }
}
