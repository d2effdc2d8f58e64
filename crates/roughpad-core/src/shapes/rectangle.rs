//! Rectangle geometry.

use crate::geometry::{point_in_rect, point_near_point};
use crate::selection::Handle;
use kurbo::{BezPath, Point};

/// Corner handles in hit-test order.
pub(super) const HANDLES: &[Handle] = &[
    Handle::TopLeft,
    Handle::TopRight,
    Handle::BottomLeft,
    Handle::BottomRight,
];

/// Position of a corner handle, read from the raw (unnormalized) points.
fn corner(handle: Handle, start: Point, end: Point) -> Option<Point> {
    match handle {
        Handle::TopLeft => Some(Point::new(start.x, start.y)),
        Handle::TopRight => Some(Point::new(end.x, start.y)),
        Handle::BottomLeft => Some(Point::new(start.x, end.y)),
        Handle::BottomRight => Some(Point::new(end.x, end.y)),
        _ => None,
    }
}

pub(super) fn handle_at(point: Point, start: Point, end: Point) -> Option<Handle> {
    // Corners sit inside the body, so they must win over it.
    HANDLES
        .iter()
        .copied()
        .find(|&handle| corner(handle, start, end).is_some_and(|c| point_near_point(point, c)))
        .or_else(|| point_in_rect(point, start, end).then_some(Handle::Inside))
}

pub(super) fn outline(start: Point, end: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(start);
    path.line_to(Point::new(end.x, start.y));
    path.line_to(end);
    path.line_to(Point::new(start.x, end.y));
    path.close_path();
    path
}
