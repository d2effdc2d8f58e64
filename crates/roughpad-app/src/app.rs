//! Application state: a drawing session wired to an SVG surface.

use crate::script::{Script, ScriptEvent};
use crate::shortcuts::{KeyPress, ShortcutAction, ShortcutRegistry};
use kurbo::Point;
use peniko::Color;
use roughpad_core::{Canvas, Element};
use roughpad_render::{
    HandDrawnStyle, RendererError, RoughDrawable, RoughGenerator, SerializableColor, SvgSurface, paint,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid session script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("Invalid key combination {0:?}")]
    InvalidKey(String),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: SerializableColor,
    pub stroke_color: SerializableColor,
    pub stroke_width: f64,
    pub roughness: f64,
    pub seed: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let style = HandDrawnStyle::default();
        Self {
            title: "RoughPad".to_string(),
            width: 1280,
            height: 800,
            background_color: Color::from_rgba8(250, 250, 250, 255).into(),
            stroke_color: style.stroke_color,
            stroke_width: style.stroke_width,
            roughness: style.roughness,
            seed: style.seed,
        }
    }
}

impl AppConfig {
    /// Stroke style handed to the shape generator.
    pub fn style(&self) -> HandDrawnStyle {
        HandDrawnStyle {
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            roughness: self.roughness,
            seed: self.seed,
        }
    }
}

/// A running session.
///
/// The SVG surface is repainted from scratch after every change to the
/// elements, through a canvas observer.
pub struct App {
    config: AppConfig,
    canvas: Canvas<RoughGenerator>,
    surface: Rc<RefCell<SvgSurface>>,
    /// First paint failure since the last render, reported by `render_svg`.
    paint_error: Rc<RefCell<Option<RendererError>>>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let surface = SvgSurface::new(
            f64::from(config.width),
            f64::from(config.height),
            config.background_color,
        )?;
        let surface = Rc::new(RefCell::new(surface));
        let paint_error = Rc::new(RefCell::new(None));

        let mut canvas = Canvas::new(RoughGenerator::new(config.style()));
        {
            let surface = Rc::clone(&surface);
            let paint_error = Rc::clone(&paint_error);
            canvas.subscribe(Box::new(move |elements: &[Element<RoughDrawable>]| {
                if let Err(err) = paint(&mut *surface.borrow_mut(), elements) {
                    log::error!("Repaint failed: {err}");
                    let mut slot = paint_error.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(err);
                    }
                }
            }));
        }

        log::info!("Created session \"{}\" ({}x{})", config.title, config.width, config.height);
        Ok(Self {
            config,
            canvas,
            surface,
            paint_error,
        })
    }

    /// Create a session from `script` and replay all of its events.
    pub fn from_script(script: &Script) -> Result<Self, AppError> {
        let mut app = Self::new(script.config.clone())?;
        app.run(&script.events)?;
        Ok(app)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas<RoughGenerator> {
        &self.canvas
    }

    /// Replay `events` in order.
    pub fn run(&mut self, events: &[ScriptEvent]) -> Result<(), AppError> {
        for event in events {
            self.apply(event)?;
        }
        log::debug!(
            "Replayed {} event(s); {} element(s) on canvas",
            events.len(),
            self.canvas.elements().len()
        );
        Ok(())
    }

    /// Apply a single event. Returns true if the elements changed.
    pub fn apply(&mut self, event: &ScriptEvent) -> Result<bool, AppError> {
        let changed = match event {
            ScriptEvent::Tool(tool) => {
                self.canvas.set_tool(*tool);
                false
            }
            ScriptEvent::Down([x, y]) => self.canvas.pointer_down(Point::new(*x, *y)),
            ScriptEvent::Move([x, y]) => self.canvas.pointer_move(Point::new(*x, *y)),
            ScriptEvent::Up([x, y]) => self.canvas.pointer_up(Point::new(*x, *y)),
            ScriptEvent::Undo => self.canvas.undo(),
            ScriptEvent::Redo => self.canvas.redo(),
            ScriptEvent::Clear => {
                self.canvas.clear();
                true
            }
            ScriptEvent::Key(combo) => {
                let press: KeyPress = combo.parse()?;
                self.handle_key(&press)
            }
        };
        Ok(changed)
    }

    /// Run the shortcut bound to `press`, if any.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        match ShortcutRegistry::lookup(press) {
            Some(ShortcutAction::Undo) => self.canvas.undo(),
            Some(ShortcutAction::Redo) => self.canvas.redo(),
            Some(ShortcutAction::SelectTool(tool)) => {
                self.canvas.set_tool(tool);
                false
            }
            None => {
                log::debug!("No shortcut bound to {press}");
                false
            }
        }
    }

    /// The current frame as an SVG document.
    pub fn render_svg(&self) -> Result<String, AppError> {
        if let Some(err) = self.paint_error.borrow_mut().take() {
            return Err(err.into());
        }
        Ok(self.surface.borrow().finish())
    }

    /// Write the current frame to `path`.
    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        let path = path.as_ref();
        let svg = self.render_svg()?;
        std::fs::write(path, svg)?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}
