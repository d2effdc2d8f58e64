//! Editing session: element history, editor state and change notification.

use crate::editor::Editor;
use crate::history::History;
use crate::input::{MouseButton, PointerEvent};
use crate::selection::CursorIcon;
use crate::shapes::{Element, ShapeGenerator};
use crate::tools::ToolKind;
use kurbo::Point;
use std::fmt;

/// One state of the element sequence.
pub type Snapshot<R> = Vec<Element<R>>;

/// Callback run with the current elements after every change.
pub type Observer<R> = Box<dyn FnMut(&[Element<R>])>;

/// A drawing session.
///
/// Owns the undo/redo history of element sequences, the editor state
/// machine and the shape generator. Observers registered with
/// [`Canvas::subscribe`] are told about every change to the current snapshot.
pub struct Canvas<G: ShapeGenerator> {
    history: History<Snapshot<G::Renderable>>,
    editor: Editor,
    generator: G,
    observers: Vec<Observer<G::Renderable>>,
}

impl<G: ShapeGenerator> Canvas<G> {
    /// Create an empty session with unbounded history.
    pub fn new(generator: G) -> Self {
        Self {
            history: History::new(Vec::new()),
            editor: Editor::new(),
            generator,
            observers: Vec::new(),
        }
    }

    /// Create an empty session that keeps at most `limit` history states.
    pub fn with_history_limit(generator: G, limit: usize) -> Self {
        Self {
            history: History::with_limit(Vec::new(), limit),
            ..Self::new(generator)
        }
    }

    /// Elements of the current snapshot, in creation order.
    pub fn elements(&self) -> &[Element<G::Renderable>] {
        self.history.current()
    }

    pub fn history(&self) -> &History<Snapshot<G::Renderable>> {
        &self.history
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn tool(&self) -> ToolKind {
        self.editor.tool()
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!("Tool changed to {}", tool.name());
        self.editor.set_tool(tool);
    }

    pub fn cursor(&self) -> CursorIcon {
        self.editor.cursor()
    }

    /// Register a callback for snapshot changes. It runs once immediately
    /// with the current elements.
    pub fn subscribe(&mut self, mut observer: Observer<G::Renderable>) {
        observer(self.history.current());
        self.observers.push(observer);
    }

    /// Feed a pointer event. Only the primary button drives gestures.
    /// Returns true if the elements changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position, button } if button == MouseButton::Left => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position, button } if button == MouseButton::Left => self.pointer_up(position),
            PointerEvent::Down { button, .. } | PointerEvent::Up { button, .. } => {
                log::trace!("Ignoring {button:?} button");
                false
            }
        }
    }

    pub fn pointer_down(&mut self, point: Point) -> bool {
        let changed = self.editor.pointer_down(point, &mut self.history, &self.generator);
        self.notify_if(changed)
    }

    pub fn pointer_move(&mut self, point: Point) -> bool {
        let changed = self.editor.pointer_move(point, &mut self.history, &self.generator);
        self.notify_if(changed)
    }

    /// Finish the current gesture. The release position is not used: the
    /// last move already placed the element.
    pub fn pointer_up(&mut self, _point: Point) -> bool {
        let changed = self.editor.pointer_up(&mut self.history, &self.generator);
        self.notify_if(changed)
    }

    /// Step back one history state. Any gesture in progress is dropped.
    pub fn undo(&mut self) -> bool {
        self.editor.cancel();
        let moved = self.history.undo();
        if moved {
            log::debug!("Undo to state {}", self.history.index());
        }
        self.notify_if(moved)
    }

    /// Step forward one history state. Any gesture in progress is dropped.
    pub fn redo(&mut self) -> bool {
        self.editor.cancel();
        let moved = self.history.redo();
        if moved {
            log::debug!("Redo to state {}", self.history.index());
        }
        self.notify_if(moved)
    }

    /// Record an empty snapshot as a new undoable step.
    pub fn clear(&mut self) {
        self.editor.cancel();
        log::info!("Clearing {} element(s)", self.history.current().len());
        self.history.push(Vec::new(), false);
        self.notify();
    }

    fn notify_if(&mut self, changed: bool) -> bool {
        if changed {
            self.notify();
        }
        changed
    }

    fn notify(&mut self) {
        let elements = self.history.current();
        for observer in &mut self.observers {
            observer(elements);
        }
    }
}

impl<G: ShapeGenerator + Default> Default for Canvas<G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<G> fmt::Debug for Canvas<G>
where
    G: ShapeGenerator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("history", &self.history)
            .field("editor", &self.editor)
            .field("generator", &self.generator)
            .field("observers", &self.observers.len())
            .finish()
    }
}
