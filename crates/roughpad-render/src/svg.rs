//! SVG output surface.

use crate::renderer::{RenderResult, RendererError, Surface};
use crate::rough::{RoughDrawable, SerializableColor};
use std::fmt::Write as _;
use std::io;

/// Accumulates drawables as SVG `<path>` elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: SerializableColor,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64, background: SerializableColor) -> RenderResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RendererError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            background,
            body: String::new(),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The complete SVG document for what has been drawn so far.
    pub fn finish(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height,
        ));
        if self.background.a > 0 {
            out.push_str(&format!(
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
                self.background.to_hex(),
                self.background.opacity(),
            ));
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    /// Write the document to `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> RenderResult<()> {
        writer.write_all(self.finish().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn draw(&mut self, drawable: &RoughDrawable) -> RenderResult<()> {
        let style = &drawable.style;
        let color = style.stroke_color;
        for stroke in &drawable.strokes {
            writeln!(
                self.body,
                "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
                stroke.to_svg(),
                color.to_hex(),
                color.opacity(),
                style.stroke_width,
            )
            .map_err(|err| RendererError::RenderFailed(err.to_string()))?;
        }
        Ok(())
    }
}
