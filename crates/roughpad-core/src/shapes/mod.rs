//! Drawable elements on the canvas.

mod line;
mod rectangle;

use crate::geometry;
use crate::selection::Handle;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable identifier of an element.
///
/// Assigned from the sequence length when the element is created and never
/// reused for another element within the same snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of an element. Each kind decides how its two points are read
/// and which handles it exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Straight segment from `start` to `end`.
    Line,
    /// Axis-aligned box with `start` and `end` as opposite corners.
    Rectangle,
}

impl ElementKind {
    /// Handles this kind exposes, in hit-test order (body excluded).
    pub fn handles(self) -> &'static [Handle] {
        match self {
            ElementKind::Line => line::HANDLES,
            ElementKind::Rectangle => rectangle::HANDLES,
        }
    }

    /// Find the handle under `point`, trying handles before the body.
    pub fn handle_at(self, point: Point, start: Point, end: Point) -> Option<Handle> {
        match self {
            ElementKind::Line => line::handle_at(point, start, end),
            ElementKind::Rectangle => rectangle::handle_at(point, start, end),
        }
    }

    /// Outline path of the raw geometry (used by renderers).
    pub fn outline(self, start: Point, end: Point) -> BezPath {
        match self {
            ElementKind::Line => line::outline(start, end),
            ElementKind::Rectangle => rectangle::outline(start, end),
        }
    }
}

/// Produces the renderable representation of a piece of geometry.
///
/// The engine never looks inside a renderable; it only stores it next to the
/// geometry it was generated from.
pub trait ShapeGenerator {
    /// Opaque handle understood by the rendering side.
    type Renderable: Clone + fmt::Debug;

    /// Generate a renderable for the given kind and points.
    fn generate(&self, kind: ElementKind, start: Point, end: Point) -> Self::Renderable;
}

/// Geometry-only generator, for sessions that never render.
impl ShapeGenerator for () {
    type Renderable = ();

    fn generate(&self, _kind: ElementKind, _start: Point, _end: Point) {}
}

/// Errors raised by element edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("No element with id {0}")]
    UnknownElement(ElementId),
}

/// A drawable element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<R> {
    id: ElementId,
    /// Element kind.
    pub kind: ElementKind,
    /// First defining point (x1, y1).
    pub start: Point,
    /// Second defining point (x2, y2).
    pub end: Point,
    renderable: R,
}

impl<R> Element<R> {
    /// Create an element and request its renderable from `generator`.
    ///
    /// No normalization is applied, so a zero-size element is valid.
    pub fn create<G>(id: ElementId, start: Point, end: Point, kind: ElementKind, generator: &G) -> Self
    where
        G: ShapeGenerator<Renderable = R> + ?Sized,
    {
        Self {
            id,
            kind,
            start,
            end,
            renderable: generator.generate(kind, start, end),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The renderable produced for the current geometry.
    pub fn renderable(&self) -> &R {
        &self.renderable
    }

    /// Canonical points for this element (see [`geometry::normalize`]).
    pub fn normalized(&self) -> (Point, Point) {
        geometry::normalize(self.kind, self.start, self.end)
    }

    /// Bounding box of the two defining points.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// Width and height of the bounding box.
    pub fn size(&self) -> (f64, f64) {
        let bounds = self.bounds();
        (bounds.width(), bounds.height())
    }
}

/// Return a copy of `elements` with the element matching `id` replaced by a
/// freshly generated one. Every other element keeps its position.
pub fn update_element<G>(
    elements: &[Element<G::Renderable>],
    id: ElementId,
    start: Point,
    end: Point,
    kind: ElementKind,
    generator: &G,
) -> Result<Vec<Element<G::Renderable>>, EditError>
where
    G: ShapeGenerator + ?Sized,
{
    let index = elements
        .iter()
        .position(|element| element.id == id)
        .ok_or(EditError::UnknownElement(id))?;

    let mut updated = elements.to_vec();
    updated[index] = Element::create(id, start, end, kind, generator);
    Ok(updated)
}

/// Next free id for a sequence: its length.
pub fn next_id<R>(elements: &[Element<R>]) -> ElementId {
    ElementId(elements.len())
}
