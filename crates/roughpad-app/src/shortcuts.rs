//! Keyboard shortcut registry and documentation.

use crate::app::AppError;
use roughpad_core::{Modifiers, ToolKind};
use std::fmt;
use std::str::FromStr;

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    SelectTool(ToolKind),
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    pub action: ShortcutAction,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        action: ShortcutAction,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            action,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Whether `press` triggers this shortcut. Cmd counts as Ctrl.
    pub fn matches(&self, press: &KeyPress) -> bool {
        let mods = press.modifiers;
        self.key.eq_ignore_ascii_case(&press.key)
            && self.ctrl == mods.command()
            && self.shift == mods.shift
            && !mods.alt
    }
}

/// A key together with the modifiers held, parsed from text like `ctrl+shift+z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub modifiers: Modifiers,
}

impl FromStr for KeyPress {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::default();
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = parts.pop().filter(|key| !key.is_empty());
        let Some(key) = key else {
            return Err(AppError::InvalidKey(s.to_string()));
        };

        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" | "option" => modifiers.alt = true,
                "meta" | "cmd" | "super" => modifiers.meta = true,
                _ => return Err(AppError::InvalidKey(s.to_string())),
            }
        }

        Ok(Self {
            key: key.to_ascii_uppercase(),
            modifiers,
        })
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mods = self.modifiers;
        for (held, name) in [(mods.ctrl, "Ctrl"), (mods.meta, "Cmd"), (mods.alt, "Alt"), (mods.shift, "Shift")] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        f.write_str(&self.key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, "Undo", ShortcutAction::Undo),
            Shortcut::new("Z", true, true, "Redo", ShortcutAction::Redo),
            Shortcut::new("Y", true, false, "Redo", ShortcutAction::Redo),
            Shortcut::new(
                "V",
                false,
                false,
                "Selection tool",
                ShortcutAction::SelectTool(ToolKind::Selection),
            ),
            Shortcut::new("L", false, false, "Line tool", ShortcutAction::SelectTool(ToolKind::Line)),
            Shortcut::new(
                "R",
                false,
                false,
                "Rectangle tool",
                ShortcutAction::SelectTool(ToolKind::Rectangle),
            ),
            Shortcut::new("P", false, false, "Pencil tool", ShortcutAction::SelectTool(ToolKind::Pencil)),
            Shortcut::new("T", false, false, "Text tool", ShortcutAction::SelectTool(ToolKind::Text)),
        ]
    }

    /// Action bound to `press`, if any.
    pub fn lookup(press: &KeyPress) -> Option<ShortcutAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(press))
            .map(|shortcut| shortcut.action)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(combo: &str) -> Option<ShortcutAction> {
        ShortcutRegistry::lookup(&combo.parse().unwrap())
    }

    #[test]
    fn test_parse_key_press() {
        let press: KeyPress = "Ctrl+Shift+z".parse().unwrap();
        assert_eq!(press.key, "Z");
        assert!(press.modifiers.ctrl && press.modifiers.shift);
        assert!(!press.modifiers.alt && !press.modifiers.meta);
        assert_eq!(press.to_string(), "Ctrl+Shift+Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("ctrl+".parse::<KeyPress>(), Err(AppError::InvalidKey(_))));
        assert!("".parse::<KeyPress>().is_err());
        assert!("hyper+z".parse::<KeyPress>().is_err());
    }

    #[test]
    fn test_history_shortcuts() {
        assert_eq!(lookup("ctrl+z"), Some(ShortcutAction::Undo));
        assert_eq!(lookup("ctrl+shift+z"), Some(ShortcutAction::Redo));
        assert_eq!(lookup("ctrl+y"), Some(ShortcutAction::Redo));
        assert_eq!(lookup("cmd+z"), Some(ShortcutAction::Undo));
        assert_eq!(lookup("z"), None);
        assert_eq!(lookup("ctrl+alt+z"), None);
    }

    #[test]
    fn test_tool_shortcuts() {
        assert_eq!(lookup("v"), Some(ShortcutAction::SelectTool(ToolKind::Selection)));
        assert_eq!(lookup("R"), Some(ShortcutAction::SelectTool(ToolKind::Rectangle)));
        assert_eq!(lookup("ctrl+v"), None);
        assert_eq!(lookup("Delete"), None);
    }

    #[test]
    fn test_format() {
        let shortcuts = ShortcutRegistry::all();
        let formatted: Vec<_> = shortcuts.iter().map(Shortcut::format).collect();
        assert!(formatted.contains(&"Ctrl+Shift+Z".to_string()));
        assert!(formatted.contains(&"L".to_string()));
    }

    #[test]
    fn test_every_tool_has_hotkey() {
        for tool in ToolKind::ALL {
            let bound = ShortcutRegistry::all()
                .iter()
                .any(|s| s.action == ShortcutAction::SelectTool(tool));
            assert!(bound, "{tool:?} has no hotkey");
        }
    }
}
