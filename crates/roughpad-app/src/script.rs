//! Recorded editing sessions.

use crate::app::{AppConfig, AppError};
use roughpad_core::ToolKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    Tool(ToolKind),
    /// Primary-button press at `[x, y]`.
    Down([f64; 2]),
    Move([f64; 2]),
    Up([f64; 2]),
    Undo,
    Redo,
    Clear,
    /// Key combination such as `"ctrl+z"` or `"r"`.
    Key(String),
}

/// A session: configuration plus the inputs to replay.
///
/// ```json
/// {
///   "config": { "roughness": 0 },
///   "events": [{ "tool": "rectangle" }, { "down": [10, 10] }, { "move": [50, 30] },
///              { "up": [50, 30] }, "undo", { "key": "ctrl+y" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub config: AppConfig,
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded {} event(s) from {}", script.events.len(), path.display());
        Ok(script)
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_all_events() {
        let script = Script::from_json(
            r#"{"events": [
                {"tool": "selection"}, {"down": [1, 2]}, {"move": [3.5, 4]}, {"up": [3.5, 4]},
                "undo", "redo", "clear", {"key": "ctrl+z"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Tool(ToolKind::Selection),
                ScriptEvent::Down([1.0, 2.0]),
                ScriptEvent::Move([3.5, 4.0]),
                ScriptEvent::Up([3.5, 4.0]),
                ScriptEvent::Undo,
                ScriptEvent::Redo,
                ScriptEvent::Clear,
                ScriptEvent::Key("ctrl+z".into()),
            ]
        );
        assert_eq!(script.config, AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let script = Script::from_json(r#"{"config": {"width": 320, "roughness": 0}}"#).unwrap();
        assert_eq!(script.config.width, 320);
        assert!(script.config.roughness.abs() < f64::EPSILON);
        assert_eq!(script.config.height, AppConfig::default().height);
        assert!(script.events.is_empty());
    }

    #[test]
    fn test_rejects_unknown_event() {
        let err = Script::from_json(r#"{"events": ["explode"]}"#).unwrap_err();
        assert!(matches!(err, AppError::Script(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let script = Script {
            config: AppConfig::default(),
            events: vec![ScriptEvent::Tool(ToolKind::Line), ScriptEvent::Down([0.0, 0.0]), ScriptEvent::Undo],
        };
        let json = script.to_json().unwrap();
        assert_eq!(Script::from_json(&json).unwrap(), script);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"events": ["clear"]}}"#).unwrap();
        let script = Script::load(file.path()).unwrap();
        assert_eq!(script.events, vec![ScriptEvent::Clear]);

        assert!(matches!(Script::load("/nonexistent/session.json"), Err(AppError::Io(_))));
    }
}
