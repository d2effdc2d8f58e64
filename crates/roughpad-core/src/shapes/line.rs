//! Line geometry.

use crate::geometry::{point_near_point, point_on_segment};
use crate::selection::Handle;
use kurbo::{BezPath, Point};

/// Endpoint handles in hit-test order.
pub(super) const HANDLES: &[Handle] = &[Handle::Start, Handle::End];

pub(super) fn handle_at(point: Point, start: Point, end: Point) -> Option<Handle> {
    if point_near_point(point, start) {
        Some(Handle::Start)
    } else if point_near_point(point, end) {
        Some(Handle::End)
    } else if point_on_segment(point, start, end) {
        Some(Handle::Inside)
    } else {
        None
    }
}

pub(super) fn outline(start: Point, end: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(start);
    path.line_to(end);
    path
}
