//! Vello scene surface.

use crate::renderer::{RenderResult, Surface};
use crate::rough::RoughDrawable;
use kurbo::{Affine, Cap, Join, Stroke};
use peniko::Color;
use vello::Scene;

/// Builds a Vello [`Scene`] for GPU rendering.
///
/// Presenting the scene (device, surface and render loop) is left to the
/// embedding window layer.
pub struct VelloSurface {
    scene: Scene,
    transform: Affine,
}

impl Default for VelloSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloSurface {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Set the canvas-to-surface transform (HiDPI scale, for instance).
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }
}

impl Surface for VelloSurface {
    fn clear(&mut self) {
        self.scene.reset();
    }

    fn draw(&mut self, drawable: &RoughDrawable) -> RenderResult<()> {
        let style = &drawable.style;
        let stroke = Stroke::new(style.stroke_width)
            .with_caps(Cap::Round)
            .with_join(Join::Round);
        let color: Color = style.stroke_color.into();

        for path in &drawable.strokes {
            self.scene.stroke(&stroke, self.transform, color, None, path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::paint;
    use crate::rough::RoughGenerator;
    use kurbo::Point;
    use roughpad_core::{Element, ElementId, ElementKind};

    #[test]
    fn test_paint_into_scene() {
        let generator = RoughGenerator::default();
        let elements = vec![Element::create(
            ElementId(0),
            Point::ZERO,
            Point::new(30.0, 30.0),
            ElementKind::Rectangle,
            &generator,
        )];
        let mut surface = VelloSurface::new();
        surface.set_transform(Affine::scale(2.0));
        paint(&mut surface, &elements).unwrap();
        paint(&mut surface, &[]).unwrap();
    }
}
