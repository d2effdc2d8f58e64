//! Geometry helpers used by hit-testing and the editor.

use crate::shapes::ElementKind;
use kurbo::Point;

/// Half-size of the square around a corner or endpoint that counts as a handle hit.
pub const HANDLE_TOLERANCE: f64 = 10.0;
/// Maximum distance from a line segment that still counts as a hit on it.
pub const SEGMENT_TOLERANCE: f64 = 5.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Check whether `point` lies within the handle square centered on `target`.
///
/// This is an axis-aligned square test, not a circular radius.
pub fn point_near_point(point: Point, target: Point) -> bool {
    (point.x - target.x).abs() < HANDLE_TOLERANCE && (point.y - target.y).abs() < HANDLE_TOLERANCE
}

/// Check whether `point` lies inside the box spanned by `top_left` and `bottom_right`
/// (edges inclusive).
///
/// The corners are taken as given: an inverted box contains nothing.
pub fn point_in_rect(point: Point, top_left: Point, bottom_right: Point) -> bool {
    point.x >= top_left.x
        && point.x <= bottom_right.x
        && point.y >= top_left.y
        && point.y <= bottom_right.y
}

/// Check whether `point` is on the segment `a`→`b`.
///
/// The perpendicular distance to the line through the segment must be below
/// [`SEGMENT_TOLERANCE`] and the point must fall inside the segment's bounding
/// box grown by the same tolerance. A zero-length segment is treated as a point.
pub fn point_on_segment(point: Point, a: Point, b: Point) -> bool {
    let length = distance(a, b);
    if length < f64::EPSILON {
        return distance(point, a) < SEGMENT_TOLERANCE;
    }

    // Twice the triangle area divided by the base is the height.
    let area = ((a.x - point.x) * (b.y - point.y) - (b.x - point.x) * (a.y - point.y)).abs();
    let perpendicular = area / length;

    let min = Point::new(a.x.min(b.x) - SEGMENT_TOLERANCE, a.y.min(b.y) - SEGMENT_TOLERANCE);
    let max = Point::new(a.x.max(b.x) + SEGMENT_TOLERANCE, a.y.max(b.y) + SEGMENT_TOLERANCE);

    perpendicular < SEGMENT_TOLERANCE && point_in_rect(point, min, max)
}

/// Canonical form of an element's two defining points.
///
/// Rectangles become (min x, min y)-(max x, max y). Lines keep their endpoints
/// but are ordered so the first one has the smaller x, or the smaller y on a tie.
pub fn normalize(kind: ElementKind, start: Point, end: Point) -> (Point, Point) {
    match kind {
        ElementKind::Rectangle => (
            Point::new(start.x.min(end.x), start.y.min(end.y)),
            Point::new(start.x.max(end.x), start.y.max(end.y)),
        ),
        ElementKind::Line => {
            if start.x < end.x || (start.x == end.x && start.y <= end.y) {
                (start, end)
            } else {
                (end, start)
            }
        }
    }
}
