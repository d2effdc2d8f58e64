//! RoughPad Application
//!
//! Application shell around the editing engine: configuration, keyboard
//! shortcuts, session scripts and SVG export.

mod app;
mod script;
mod shortcuts;

pub use app::{App, AppConfig, AppError};
pub use script::{Script, ScriptEvent};
pub use shortcuts::{KeyPress, Shortcut, ShortcutAction, ShortcutRegistry};
