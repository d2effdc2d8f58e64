//! Hand-drawn stroke generation.

use kurbo::{BezPath, PathEl, Point};
use peniko::Color;
use roughpad_core::{ElementKind, ShapeGenerator};
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// `#rrggbb`, alpha excluded.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in [0, 1].
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke settings shared by every generated drawable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandDrawnStyle {
    pub stroke_color: SerializableColor,
    pub stroke_width: f64,
    /// 0 = clean, 1 = slight wobble, 2 = very sketchy.
    pub roughness: f64,
    /// Base seed for the wobble; equal inputs give equal strokes.
    pub seed: u32,
}

impl Default for HandDrawnStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            roughness: 1.0,
            seed: 1,
        }
    }
}

/// Renderable produced for one element: the strokes to paint and how.
#[derive(Debug, Clone)]
pub struct RoughDrawable {
    pub kind: ElementKind,
    pub strokes: Vec<BezPath>,
    pub style: HandDrawnStyle,
}

/// Shape generator that sketches outlines with a double hand-drawn stroke.
#[derive(Debug, Clone, Default)]
pub struct RoughGenerator {
    style: HandDrawnStyle,
}

impl RoughGenerator {
    pub fn new(style: HandDrawnStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &HandDrawnStyle {
        &self.style
    }

    fn seed_for(&self, kind: ElementKind) -> u32 {
        let salt = match kind {
            ElementKind::Line => 0x9e37_79b9,
            ElementKind::Rectangle => 0x85eb_ca6b,
        };
        self.style.seed ^ salt
    }
}

impl ShapeGenerator for RoughGenerator {
    type Renderable = RoughDrawable;

    fn generate(&self, kind: ElementKind, start: Point, end: Point) -> RoughDrawable {
        let outline = kind.outline(start, end);
        let roughness = self.style.roughness;

        let strokes = if roughness > 0.0 {
            let seed = self.seed_for(kind);
            (0..2)
                .map(|stroke_index| apply_hand_drawn_effect(&outline, roughness, seed, stroke_index))
                .collect()
        } else {
            vec![outline]
        };

        RoughDrawable {
            kind,
            strokes,
            style: self.style,
        }
    }
}

/// Simple seeded random number generator (xorshift32).
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random float in range [-1, 1]
    fn next_f64(&mut self) -> f64 {
        (f64::from(self.next_u32()) / f64::from(u32::MAX)) * 2.0 - 1.0
    }

    fn offset(&mut self, amount: f64) -> f64 {
        self.next_f64() * amount
    }

    fn jitter(&mut self, p: Point, amount: f64) -> Point {
        Point::new(p.x + self.offset(amount), p.y + self.offset(amount))
    }
}

/// Wobble a path so it looks sketched by hand.
///
/// Endpoints are nudged by up to `2 * roughness` so corners over- or
/// undershoot, and straight segments bow sideways in proportion to their
/// length. `stroke_index` picks an independent random sequence so two
/// strokes of the same path never coincide.
pub fn apply_hand_drawn_effect(path: &BezPath, roughness: f64, seed: u32, stroke_index: u32) -> BezPath {
    if roughness <= 0.0 {
        return path.clone();
    }

    let max_offset = roughness * 2.0;
    let bowing = roughness;
    let mut rng = SimpleRng::new(seed.wrapping_add(stroke_index.wrapping_mul(99991)));

    let mut result = BezPath::new();
    let mut last = Point::ZERO;

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                result.move_to(rng.jitter(p, max_offset));
                last = p;
            }
            PathEl::LineTo(p) => {
                let delta = p - last;
                let len = delta.hypot();
                let bow = rng.offset(bowing * roughness * len / 200.0);
                let perp = if len > 0.001 {
                    kurbo::Vec2::new(-delta.y / len, delta.x / len)
                } else {
                    kurbo::Vec2::ZERO
                };
                let control = last.midpoint(p) + perp * bow;
                result.quad_to(control, rng.jitter(p, max_offset));
                last = p;
            }
            PathEl::QuadTo(p1, p2) => {
                result.quad_to(rng.jitter(p1, max_offset * 0.7), rng.jitter(p2, max_offset));
                last = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                result.curve_to(
                    rng.jitter(p1, max_offset * 0.5),
                    rng.jitter(p2, max_offset * 0.5),
                    rng.jitter(p3, max_offset),
                );
                last = p3;
            }
            PathEl::ClosePath => result.close_path(),
        }
    }

    result
}
