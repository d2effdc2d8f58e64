//! RoughPad Core Library
//!
//! Platform-agnostic shape-editing engine: the element model, hit-testing,
//! the pointer-driven editing state machine and the undo/redo history.

pub mod canvas;
pub mod editor;
pub mod geometry;
pub mod history;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::{Canvas, Observer, Snapshot};
pub use editor::{Editor, Interaction};
pub use history::History;
pub use input::{Modifiers, MouseButton, PointerEvent};
pub use selection::{CursorIcon, Handle, HitResult, locate};
pub use shapes::{EditError, Element, ElementId, ElementKind, ShapeGenerator};
pub use tools::ToolKind;
