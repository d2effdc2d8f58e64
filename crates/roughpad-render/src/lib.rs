//! RoughPad Render Library
//!
//! Turns element geometry into hand-drawn strokes and paints them onto a
//! [`Surface`]. The SVG surface is always available; the Vello surface is
//! behind the `vello-renderer` feature.

mod renderer;
pub mod rough;
mod svg;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderResult, RendererError, Surface, paint};
pub use rough::{HandDrawnStyle, RoughDrawable, RoughGenerator, SerializableColor};
pub use svg::SvgSurface;

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
