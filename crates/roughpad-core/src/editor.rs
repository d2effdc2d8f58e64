//! Pointer-driven editing state machine.
//!
//! The editor interprets pointer events against the current tool and
//! interaction mode. Every change to the element sequence goes through the
//! [`History`]: starting a gesture records a new step, and the intermediate
//! updates of a drag overwrite that step in place.

use crate::canvas::Snapshot;
use crate::history::History;
use crate::selection::{CursorIcon, HitResult, apply_move, apply_resize, cursor_for_handle, locate};
use crate::shapes::{Element, ElementId, ElementKind, ShapeGenerator, next_id, update_element};
use crate::tools::ToolKind;
use kurbo::Point;

/// Current interaction mode, carrying whatever the mode needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// A new element is being drawn; its first point is fixed.
    Drawing { id: ElementId, kind: ElementKind },
    /// An element is being dragged by its body.
    Moving {
        grab: HitResult,
        /// Whether the gesture already has its own history step.
        committed: bool,
    },
    /// An element is being reshaped by one of its handles.
    Resizing { grab: HitResult, committed: bool },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// The grabbed element, while moving or resizing.
    pub fn selection(&self) -> Option<&HitResult> {
        match self {
            Interaction::Moving { grab, .. } | Interaction::Resizing { grab, .. } => Some(grab),
            Interaction::Idle | Interaction::Drawing { .. } => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Interaction::Idle => "idle",
            Interaction::Drawing { .. } => "drawing",
            Interaction::Moving { .. } => "moving",
            Interaction::Resizing { .. } => "resizing",
        }
    }
}

/// Session-scoped editing state.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    tool: ToolKind,
    interaction: Interaction,
    cursor: CursorIcon,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Select a tool. Takes effect at the next pointer-down.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        if !tool.is_selection() {
            self.cursor = CursorIcon::Default;
        }
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Cursor hint for the element under the pointer (selection tool only).
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Drop any gesture in progress without touching the elements.
    pub fn cancel(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Handle a primary-button press.
    /// Returns true if the current snapshot changed.
    pub fn pointer_down<G>(
        &mut self,
        point: Point,
        history: &mut History<Snapshot<G::Renderable>>,
        generator: &G,
    ) -> bool
    where
        G: ShapeGenerator + ?Sized,
    {
        let mut changed = false;
        if !self.interaction.is_idle() {
            log::debug!("Pointer down while {}; finishing previous gesture", self.interaction.name());
            changed = self.pointer_up(history, generator);
        }

        if self.tool.is_selection() {
            self.interaction = match locate(point, history.current()) {
                Some(grab) if grab.handle.is_resize() => Interaction::Resizing { grab, committed: false },
                Some(grab) => Interaction::Moving { grab, committed: false },
                None => Interaction::Idle,
            };
            if let Some(grab) = self.interaction.selection() {
                log::debug!("Grabbed element {} by {:?}", grab.id, grab.handle);
            }
            return changed;
        }

        let Some(kind) = self.tool.element_kind() else {
            log::debug!("{} tool does not draw yet", self.tool.name());
            return changed;
        };

        let elements = history.current();
        let id = next_id(elements);
        let mut updated = elements.clone();
        updated.push(Element::create(id, point, point, kind, generator));
        history.push(updated, false);

        log::debug!("Started drawing {kind:?} {id}");
        self.interaction = Interaction::Drawing { id, kind };
        true
    }

    /// Handle pointer motion.
    /// Returns true if the current snapshot changed.
    pub fn pointer_move<G>(
        &mut self,
        point: Point,
        history: &mut History<Snapshot<G::Renderable>>,
        generator: &G,
    ) -> bool
    where
        G: ShapeGenerator + ?Sized,
    {
        match &mut self.interaction {
            Interaction::Idle => {
                if self.tool.is_selection() {
                    self.cursor = locate(point, history.current())
                        .map(|hit| cursor_for_handle(hit.handle))
                        .unwrap_or_default();
                }
                false
            }
            Interaction::Drawing { id, kind } => {
                let (id, kind) = (*id, *kind);
                let Some(start) = find(history.current(), id).map(|e| e.start) else {
                    log::warn!("Element {id} being drawn disappeared; ending gesture");
                    self.interaction = Interaction::Idle;
                    return false;
                };
                commit(history, generator, id, kind, start, point, true)
            }
            Interaction::Moving { grab, committed } => {
                let (start, end) = apply_move(grab, point);
                let overwrite = std::mem::replace(committed, true);
                commit(history, generator, grab.id, grab.kind, start, end, overwrite)
            }
            Interaction::Resizing { grab, committed } => {
                let (start, end) = apply_resize(grab, point);
                let overwrite = std::mem::replace(committed, true);
                commit(history, generator, grab.id, grab.kind, start, end, overwrite)
            }
        }
    }

    /// Handle a primary-button release.
    ///
    /// A freshly drawn or resized element gets its normalized geometry
    /// committed. The editor always returns to idle with nothing selected.
    /// Returns true if the current snapshot changed.
    pub fn pointer_up<G>(&mut self, history: &mut History<Snapshot<G::Renderable>>, generator: &G) -> bool
    where
        G: ShapeGenerator + ?Sized,
    {
        let finished = std::mem::take(&mut self.interaction);
        let target = match finished {
            Interaction::Drawing { id, .. } => Some(id),
            Interaction::Resizing { grab, committed: true } => Some(grab.id),
            Interaction::Idle | Interaction::Moving { .. } | Interaction::Resizing { .. } => None,
        };

        let Some(id) = target else {
            return false;
        };
        let Some(element) = find(history.current(), id) else {
            log::warn!("Element {id} vanished before the gesture ended");
            return false;
        };

        let (start, end) = element.normalized();
        if (start, end) == (element.start, element.end) {
            return false;
        }
        let kind = element.kind;
        log::debug!("Normalized {kind:?} {id} after {}", finished.name());
        commit(history, generator, id, kind, start, end, true)
    }
}

fn find<R>(elements: &[Element<R>], id: ElementId) -> Option<&Element<R>> {
    elements.iter().find(|element| element.id() == id)
}

/// Replace element `id` in the current snapshot and record the result.
fn commit<G>(
    history: &mut History<Snapshot<G::Renderable>>,
    generator: &G,
    id: ElementId,
    kind: ElementKind,
    start: Point,
    end: Point,
    overwrite: bool,
) -> bool
where
    G: ShapeGenerator + ?Sized,
{
    match update_element(history.current(), id, start, end, kind, generator) {
        Ok(elements) => {
            history.push(elements, overwrite);
            true
        }
        Err(err) => {
            log::warn!("Ignoring edit: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Handle;

    type Log = History<Snapshot<()>>;

    fn setup(tool: ToolKind) -> (Editor, Log) {
        let mut editor = Editor::new();
        editor.set_tool(tool);
        (editor, History::new(Vec::new()))
    }

    fn drag(editor: &mut Editor, history: &mut Log, from: (f64, f64), to: (f64, f64)) {
        editor.pointer_down(Point::new(from.0, from.1), history, &());
        editor.pointer_move(Point::new(to.0, to.1), history, &());
        editor.pointer_up(history, &());
    }

    #[test]
    fn test_draw_rectangle() {
        let (mut editor, mut history) = setup(ToolKind::Rectangle);

        assert!(editor.pointer_down(Point::new(10.0, 10.0), &mut history, &()));
        assert!(matches!(editor.interaction(), Interaction::Drawing { .. }));
        assert_eq!(history.len(), 2);
        let element = &history.current()[0];
        assert_eq!(element.id(), ElementId(0));
        assert_eq!((element.start, element.end), (Point::new(10.0, 10.0), Point::new(10.0, 10.0)));

        editor.pointer_move(Point::new(60.0, 40.0), &mut history, &());
        editor.pointer_move(Point::new(80.0, 50.0), &mut history, &());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current()[0].end, Point::new(80.0, 50.0));
        assert_eq!(history.current()[0].start, Point::new(10.0, 10.0));

        editor.pointer_up(&mut history, &());
        assert!(editor.interaction().is_idle());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_draw_normalizes_on_release() {
        let (mut editor, mut history) = setup(ToolKind::Rectangle);
        drag(&mut editor, &mut history, (100.0, 80.0), (20.0, 10.0));

        let element = &history.current()[0];
        assert_eq!(element.start, Point::new(20.0, 10.0));
        assert_eq!(element.end, Point::new(100.0, 80.0));
    }

    #[test]
    fn test_new_element_ids_follow_length() {
        let (mut editor, mut history) = setup(ToolKind::Line);
        drag(&mut editor, &mut history, (0.0, 0.0), (10.0, 10.0));
        drag(&mut editor, &mut history, (50.0, 0.0), (60.0, 10.0));

        let ids: Vec<_> = history.current().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![ElementId(0), ElementId(1)]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_select_miss_stays_idle() {
        let (mut editor, mut history) = setup(ToolKind::Selection);
        assert!(!editor.pointer_down(Point::new(5.0, 5.0), &mut history, &()));
        assert!(editor.interaction().is_idle());
        assert!(editor.interaction().selection().is_none());
    }

    #[test]
    fn test_move_element() {
        let (mut editor, mut history) = setup(ToolKind::Rectangle);
        drag(&mut editor, &mut history, (10.0, 10.0), (50.0, 30.0));
        let before = history.len();

        editor.set_tool(ToolKind::Selection);
        editor.pointer_down(Point::new(20.0, 20.0), &mut history, &());
        assert!(matches!(editor.interaction(), Interaction::Moving { .. }));
        editor.pointer_move(Point::new(22.0, 18.0), &mut history, &());
        editor.pointer_move(Point::new(25.0, 15.0), &mut history, &());
        editor.pointer_up(&mut history, &());

        let element = &history.current()[0];
        assert_eq!(element.start, Point::new(15.0, 5.0));
        assert_eq!(element.end, Point::new(55.0, 25.0));
        // One undo step for the whole drag.
        assert_eq!(history.len(), before + 1);
        assert!(editor.interaction().is_idle());
    }

    #[test]
    fn test_move_undo_restores_position() {
        let (mut editor, mut history) = setup(ToolKind::Rectangle);
        drag(&mut editor, &mut history, (10.0, 10.0), (50.0, 30.0));
        editor.set_tool(ToolKind::Selection);
        drag(&mut editor, &mut history, (30.0, 20.0), (130.0, 120.0));
        assert_eq!(history.current()[0].start, Point::new(110.0, 110.0));

        history.undo();
        assert_eq!(history.current()[0].start, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_click_without_drag_adds_no_step() {
        let (mut editor, mut history) = setup(ToolKind::Rectangle);
        drag(&mut editor, &mut history, (10.0, 10.0), (50.0, 30.0));
        let before = history.len();

        editor.set_tool(ToolKind::Selection);
        editor.pointer_down(Point::new(30.0, 20.0), &mut history, &());
        editor.pointer_up(&mut history, &());
        assert_eq!(history.len(), before);
    }

    #[test]
    fn test_resize_corner_and_normalize() {
        let (mut editor, mut history) = setup(ToolKind::Rectangle);
        drag(&mut editor, &mut history, (0.0, 0.0), (100.0, 100.0));

        editor.set_tool(ToolKind::Selection);
        editor.pointer_down(Point::new(99.0, 1.0), &mut history, &());
        match editor.interaction() {
            Interaction::Resizing { grab, .. } => assert_eq!(grab.handle, Handle::TopRight),
            other => panic!("expected resizing, got {other:?}"),
        }

        // Drag the top-right corner past the left edge.
        editor.pointer_move(Point::new(-50.0, 20.0), &mut history, &());
        let element = &history.current()[0];
        assert_eq!(element.start, Point::new(0.0, 20.0));
        assert_eq!(element.end, Point::new(-50.0, 100.0));

        editor.pointer_up(&mut history, &());
        let element = &history.current()[0];
        assert_eq!(element.start, Point::new(-50.0, 20.0));
        assert_eq!(element.end, Point::new(0.0, 100.0));
    }

    #[test]
    fn test_resize_line_end() {
        let (mut editor, mut history) = setup(ToolKind::Line);
        drag(&mut editor, &mut history, (0.0, 0.0), (100.0, 0.0));

        editor.set_tool(ToolKind::Selection);
        drag(&mut editor, &mut history, (100.0, 0.0), (100.0, 60.0));
        let element = &history.current()[0];
        assert_eq!(element.start, Point::new(0.0, 0.0));
        assert_eq!(element.end, Point::new(100.0, 60.0));
    }

    #[test]
    fn test_placeholder_tools_do_nothing() {
        for tool in [ToolKind::Pencil, ToolKind::Text] {
            let (mut editor, mut history) = setup(tool);
            assert!(!editor.pointer_down(Point::new(1.0, 1.0), &mut history, &()));
            assert!(!editor.pointer_move(Point::new(5.0, 5.0), &mut history, &()));
            assert!(!editor.pointer_up(&mut history, &()));
            assert!(history.current().is_empty());
            assert_eq!(history.len(), 1);
        }
    }

    #[test]
    fn test_hover_cursor() {
        let (mut editor, mut history) = setup(ToolKind::Rectangle);
        drag(&mut editor, &mut history, (0.0, 0.0), (100.0, 100.0));
        editor.set_tool(ToolKind::Selection);

        editor.pointer_move(Point::new(50.0, 50.0), &mut history, &());
        assert_eq!(editor.cursor(), CursorIcon::Move);
        editor.pointer_move(Point::new(100.0, 0.0), &mut history, &());
        assert_eq!(editor.cursor(), CursorIcon::NeswResize);
        editor.pointer_move(Point::new(0.0, 0.0), &mut history, &());
        assert_eq!(editor.cursor(), CursorIcon::NwseResize);
        editor.pointer_move(Point::new(300.0, 300.0), &mut history, &());
        assert_eq!(editor.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_hover_does_not_change_history() {
        let (mut editor, mut history) = setup(ToolKind::Rectangle);
        drag(&mut editor, &mut history, (0.0, 0.0), (100.0, 100.0));
        editor.set_tool(ToolKind::Selection);
        let before = history.len();
        assert!(!editor.pointer_move(Point::new(50.0, 50.0), &mut history, &()));
        assert_eq!(history.len(), before);
    }

    #[test]
    fn test_up_without_gesture_is_noop() {
        let (mut editor, mut history) = setup(ToolKind::Selection);
        assert!(!editor.pointer_up(&mut history, &()));
        assert!(editor.interaction().is_idle());
    }

    #[test]
    fn test_down_during_gesture_finishes_it() {
        let (mut editor, mut history) = setup(ToolKind::Rectangle);
        editor.pointer_down(Point::new(50.0, 50.0), &mut history, &());
        editor.pointer_move(Point::new(10.0, 10.0), &mut history, &());
        // Missed release: the next press closes the first rectangle.
        editor.pointer_down(Point::new(200.0, 200.0), &mut history, &());

        let elements = history.current();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].start, Point::new(10.0, 10.0));
        assert_eq!(elements[0].end, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_drawing_survives_undo_of_element() {
        let (mut editor, mut history) = setup(ToolKind::Line);
        editor.pointer_down(Point::new(0.0, 0.0), &mut history, &());
        history.undo();
        // Element is gone from the current snapshot; moving must not panic.
        assert!(!editor.pointer_move(Point::new(5.0, 5.0), &mut history, &()));
        assert!(editor.interaction().is_idle());
    }
}
