use wirekit_core::{Endpoint, Point, RouteMode};
use wirekit_editor::{simplify_orthogonal, WireDraft};

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_axis_dominant_bend_horizontal() {
    let mut draft = WireDraft::begin(Endpoint::new("a", "p1"), Point::new(0.0, 0.0));
    // |dx| = 50 beats |dy| = 5: bend runs horizontally at the last y.
    draft.add_bend(Point::new(50.0, 5.0));
    assert_eq!(draft.committed_points(), points(&[(0.0, 0.0), (50.0, 0.0)]));
}

#[test]
fn test_axis_dominant_bend_vertical_and_tie() {
    let mut draft = WireDraft::begin(Endpoint::new("a", "p1"), Point::new(0.0, 0.0));
    draft.add_bend(Point::new(5.0, 50.0));
    assert_eq!(draft.committed_points(), points(&[(0.0, 0.0), (0.0, 50.0)]));

    // Equal deltas bend vertically.
    let mut draft = WireDraft::begin(Endpoint::new("a", "p1"), Point::new(0.0, 0.0));
    draft.add_bend(Point::new(10.0, 10.0));
    assert_eq!(draft.committed_points(), points(&[(0.0, 0.0), (0.0, 10.0)]));
}

#[test]
fn test_pointer_moves_never_mutate_committed_points() {
    let mut draft = WireDraft::begin(Endpoint::new("a", "p1"), Point::new(0.0, 0.0));
    draft.add_bend(Point::new(50.0, 5.0));
    draft.set_cursor(Point::new(75.0, 120.0));
    assert_eq!(draft.committed_points().len(), 2);
    assert_eq!(draft.cursor(), Point::new(75.0, 120.0));
}

#[test]
fn test_route_with_one_click_closes_into_single_elbow() {
    // Start at port a (0,0), click canvas at (50,5), close at port b (100,40).
    let mut draft = WireDraft::begin(Endpoint::new("a", "p1"), Point::new(0.0, 0.0));
    draft.add_bend(Point::new(50.0, 5.0));
    assert_eq!(draft.committed_points(), points(&[(0.0, 0.0), (50.0, 0.0)]));

    // Closing from (50,0) toward (100,40): dx=50 beats dy=40, so the
    // closing bend is (100,0) followed by the pin itself. Cleanup then
    // drops (50,0), which lies on the same horizontal as both neighbors.
    let commit = draft
        .close(Endpoint::new("b", "p1"), Point::new(100.0, 40.0))
        .expect("distinct components commit");
    assert_eq!(commit.waypoints, points(&[(100.0, 0.0)]));
    assert_eq!(commit.mode, RouteMode::Orthogonal);
    assert_eq!(commit.from, Endpoint::new("a", "p1"));
    assert_eq!(commit.to, Endpoint::new("b", "p1"));
}

#[test]
fn test_straight_shot_commits_as_curved() {
    // No clicks, destination level with the start: no interior vertices
    // survive, so the route falls back to the curved renderer.
    let draft = WireDraft::begin(Endpoint::new("a", "p1"), Point::new(0.0, 0.0));
    let commit = draft
        .close(Endpoint::new("b", "p1"), Point::new(100.0, 0.0))
        .unwrap();
    assert!(commit.waypoints.is_empty());
    assert_eq!(commit.mode, RouteMode::Curved);
}

#[test]
fn test_close_on_start_component_cancels() {
    // Clicking the start port again is the cancel gesture; so is any
    // sibling port, which a commit would only turn into a self-loop.
    let draft = WireDraft::begin(Endpoint::new("a", "p1"), Point::new(0.0, 0.0));
    assert!(draft
        .close(Endpoint::new("a", "p1"), Point::new(0.0, 0.0))
        .is_none());

    let mut draft = WireDraft::begin(Endpoint::new("a", "p1"), Point::new(0.0, 0.0));
    draft.add_bend(Point::new(50.0, 5.0));
    assert!(draft
        .close(Endpoint::new("a", "p2"), Point::new(0.0, 40.0))
        .is_none());
}

#[test]
fn test_preview_includes_pending_axis_dominant_tail() {
    let mut draft = WireDraft::begin(Endpoint::new("a", "p1"), Point::new(0.0, 0.0));
    draft.add_bend(Point::new(50.0, 5.0));
    draft.set_cursor(Point::new(60.0, 90.0));
    // Committed (0,0)-(50,0), then a vertical-dominant tail via (50,90).
    assert_eq!(
        draft.preview_points(),
        points(&[(0.0, 0.0), (50.0, 0.0), (50.0, 90.0), (60.0, 90.0)])
    );
}

#[test]
fn test_cleanup_removes_interior_colinear_points_only() {
    let path = points(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0), (100.0, 40.0)]);
    let cleaned = simplify_orthogonal(&path);
    assert_eq!(cleaned, points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 40.0)]));

    // Endpoints survive even when everything is colinear.
    let straight = points(&[(0.0, 0.0), (30.0, 0.0), (60.0, 0.0)]);
    assert_eq!(
        simplify_orthogonal(&straight),
        points(&[(0.0, 0.0), (60.0, 0.0)])
    );
}

#[test]
fn test_cleanup_is_idempotent_on_cleaned_path() {
    let path = points(&[
        (0.0, 0.0),
        (40.0, 0.0),
        (40.0, 25.0),
        (90.0, 25.0),
        (90.0, 25.0),
        (90.0, 60.0),
    ]);
    let once = simplify_orthogonal(&path);
    let twice = simplify_orthogonal(&once);
    assert_eq!(once, twice);
}
