//! Pointer input events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Move { position: Point },
    Up { position: Point, button: MouseButton },
}

impl PointerEvent {
    /// Primary-button press.
    pub fn down(x: f64, y: f64) -> Self {
        Self::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    /// Primary-button release.
    pub fn up(x: f64, y: f64) -> Self {
        Self::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Self::Down { position, .. } | Self::Move { position } | Self::Up { position, .. } => *position,
        }
    }

    /// Button involved, if any (moves carry none).
    pub fn button(&self) -> Option<MouseButton> {
        match self {
            Self::Down { button, .. } | Self::Up { button, .. } => Some(*button),
            Self::Move { .. } => None,
        }
    }
}
