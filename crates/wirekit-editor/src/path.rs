//! SVG path-data generation and waypoint re-projection.
//!
//! Pure string/geometry helpers consumed by whatever presentation layer
//! hosts the canvas. Connections render through `[port_a, waypoints…,
//! port_b]`; a route with no interior vertices falls back to a single
//! cubic with horizontal control tangents.

use wirekit_core::Point;

use crate::wiring::WireDraft;

/// `M x y L x y …` through the given points. Empty input yields an empty
/// string.
pub fn polyline_path(points: &[Point]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        path.push_str(&format!("{} {} {}", op, p.x, p.y));
    }
    path
}

/// Cubic fallback between two pins: `M p1 C midX,p1.y midX,p2.y p2` where
/// `midX` is the horizontal midpoint. Gives the wire an S-bend that leaves
/// both pins horizontally.
pub fn curved_path(p1: Point, p2: Point) -> String {
    let mid_x = (p1.x + p2.x) / 2.0;
    format!(
        "M {} {} C {} {}, {} {}, {} {}",
        p1.x, p1.y, mid_x, p1.y, mid_x, p2.y, p2.x, p2.y
    )
}

/// Dashed preview for an in-progress draft: the committed polyline plus
/// the pending axis-dominant tail toward the live cursor.
pub fn preview_path(draft: &WireDraft) -> String {
    polyline_path(&draft.preview_points())
}

/// Shifts a stored polyline so it spans the current pin positions.
///
/// Components move after their wires are routed; rather than re-routing,
/// each stored vertex is displaced by a blend of the start and end pin
/// deltas, weighted by its normalized index. Endpoints land exactly on the
/// pins and interior vertices follow proportionally.
pub fn reproject(stored: &[Point], p1: Point, p2: Point) -> Vec<Point> {
    let Some((&first, &last)) = stored.first().zip(stored.last()) else {
        return Vec::new();
    };
    let dx_start = p1.x - first.x;
    let dy_start = p1.y - first.y;
    let dx_end = p2.x - last.x;
    let dy_end = p2.y - last.y;

    stored
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let t = if stored.len() > 1 {
                i as f64 / (stored.len() - 1) as f64
            } else {
                0.0
            };
            Point::new(
                p.x + dx_start * (1.0 - t) + dx_end * t,
                p.y + dy_start * (1.0 - t) + dy_end * t,
            )
        })
        .collect()
}
