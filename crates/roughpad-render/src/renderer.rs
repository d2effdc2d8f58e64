//! Surface abstraction.

use crate::rough::RoughDrawable;
use roughpad_core::Element;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Something elements can be painted onto.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Paint one drawable on top of what is already there.
    fn draw(&mut self, drawable: &RoughDrawable) -> RenderResult<()>;
}

/// Full redraw: clear `surface`, then paint `elements` in sequence order so
/// later elements land on top.
pub fn paint<S>(surface: &mut S, elements: &[Element<RoughDrawable>]) -> RenderResult<()>
where
    S: Surface + ?Sized,
{
    surface.clear();
    for element in elements {
        surface.draw(element.renderable())?;
    }
    log::trace!("Painted {} element(s)", elements.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rough::RoughGenerator;
    use kurbo::Point;
    use roughpad_core::{ElementId, ElementKind};

    /// Records what it was asked to draw.
    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        drawn: Vec<ElementKind>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
            self.drawn.clear();
        }

        fn draw(&mut self, drawable: &RoughDrawable) -> RenderResult<()> {
            self.drawn.push(drawable.kind);
            Ok(())
        }
    }

    struct FailingSurface;

    impl Surface for FailingSurface {
        fn clear(&mut self) {}

        fn draw(&mut self, _drawable: &RoughDrawable) -> RenderResult<()> {
            Err(RendererError::RenderFailed("out of paint".into()))
        }
    }

    fn elements() -> Vec<Element<RoughDrawable>> {
        let generator = RoughGenerator::default();
        vec![
            Element::create(ElementId(0), Point::ZERO, Point::new(10.0, 10.0), ElementKind::Line, &generator),
            Element::create(
                ElementId(1),
                Point::ZERO,
                Point::new(20.0, 20.0),
                ElementKind::Rectangle,
                &generator,
            ),
        ]
    }

    #[test]
    fn test_paint_redraws_in_order() {
        let mut surface = RecordingSurface::default();
        let elements = elements();
        paint(&mut surface, &elements).unwrap();
        paint(&mut surface, &elements).unwrap();
        assert_eq!(surface.clears, 2);
        assert_eq!(surface.drawn, vec![ElementKind::Line, ElementKind::Rectangle]);
    }

    #[test]
    fn test_paint_empty_only_clears() {
        let mut surface = RecordingSurface::default();
        paint(&mut surface, &[]).unwrap();
        assert_eq!(surface.clears, 1);
        assert!(surface.drawn.is_empty());
    }

    #[test]
    fn test_paint_propagates_errors() {
        let err = paint(&mut FailingSurface, &elements()).unwrap_err();
        assert_eq!(err.to_string(), "Render failed: out of paint");
    }
}
