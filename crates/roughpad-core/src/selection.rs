//! Hit-testing and manipulation handles.

use crate::shapes::{Element, ElementId, ElementKind};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Part of an element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    // Rectangle corners
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    // Line endpoints
    Start,
    End,
    /// Anywhere on the body that is not a handle.
    Inside,
}

impl Handle {
    /// Whether dragging this handle resizes (as opposed to moves) the element.
    pub fn is_resize(self) -> bool {
        !matches!(self, Handle::Inside)
    }
}

/// Pointer cursor hint for the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorIcon {
    #[default]
    Default,
    Move,
    /// Diagonal resize, top-left to bottom-right.
    NwseResize,
    /// Diagonal resize, top-right to bottom-left.
    NeswResize,
}

/// Cursor to show while hovering `handle`.
pub fn cursor_for_handle(handle: Handle) -> CursorIcon {
    match handle {
        Handle::TopLeft | Handle::BottomRight | Handle::Start | Handle::End => CursorIcon::NwseResize,
        Handle::TopRight | Handle::BottomLeft => CursorIcon::NeswResize,
        Handle::Inside => CursorIcon::Move,
    }
}

/// An element grabbed by the pointer.
///
/// Holds a copy of the element's geometry at grab time so a drag can be
/// computed from the original position rather than accumulated deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    pub id: ElementId,
    pub kind: ElementKind,
    pub start: Point,
    pub end: Point,
    pub handle: Handle,
    /// Pointer position minus `start` at grab time.
    pub offset: Vec2,
}

/// Find the element and handle under `point`.
///
/// Elements are tried in sequence order and the first hit wins, so earlier
/// (older) elements take priority over later ones that overlap them.
pub fn locate<R>(point: Point, elements: &[Element<R>]) -> Option<HitResult> {
    elements.iter().find_map(|element| {
        element
            .kind
            .handle_at(point, element.start, element.end)
            .map(|handle| HitResult {
                id: element.id(),
                kind: element.kind,
                start: element.start,
                end: element.end,
                handle,
                offset: point - element.start,
            })
    })
}

/// Geometry of `grab` translated so that the grabbed point sits under `pointer`.
pub fn apply_move(grab: &HitResult, pointer: Point) -> (Point, Point) {
    let delta = pointer - grab.offset - grab.start;
    (grab.start + delta, grab.end + delta)
}

/// Geometry of `grab` with the dragged handle snapped to `pointer`.
///
/// The opposite corner stays fixed; corners may cross, leaving an inverted
/// box until the gesture ends.
pub fn apply_resize(grab: &HitResult, pointer: Point) -> (Point, Point) {
    let (start, end) = (grab.start, grab.end);
    match grab.handle {
        Handle::TopLeft | Handle::Start => (pointer, end),
        Handle::BottomRight | Handle::End => (start, pointer),
        Handle::TopRight => (Point::new(start.x, pointer.y), Point::new(pointer.x, end.y)),
        Handle::BottomLeft => (Point::new(pointer.x, start.y), Point::new(end.x, pointer.y)),
        Handle::Inside => (start, end),
    }
}
