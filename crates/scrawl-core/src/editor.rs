//! Interaction state machine: pointer events in, document mutations out.
//!
//! The editor owns all mutable drawing state (document, armed tool,
//! default style, in-flight gesture). It never touches a drawing surface;
//! a host render pass reads the document and the preview shape after each
//! event and paints on its own schedule.

use crate::scene::{DecodeError, SceneDocument};
use crate::shapes::{Shape, ShapeKind, ShapeStyle, StyleCommand};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Rectangle,
    Circle,
    Line,
}

impl ToolKind {
    /// The shape kind this tool draws, if it is a drawing tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Select => None,
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Circle => Some(ShapeKind::Circle),
            ToolKind::Line => Some(ShapeKind::Line),
        }
    }
}

/// State of the in-flight pointer gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A drawing tool is dragging out a new shape.
    Drawing {
        /// Pointer position at pointer-down.
        anchor: Point,
        /// Live pointer position; the preview's moving corner.
        current: Point,
    },
    /// The selected shape is being dragged.
    Dragging {
        /// Pointer offset from the dragged shape's anchor at pointer-down.
        offset: Vec2,
    },
}

/// The drawing editor: document plus interaction state.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    /// The document being edited.
    pub scene: SceneDocument,
    /// Currently armed tool.
    tool: ToolKind,
    /// Style applied to freshly drawn shapes.
    default_style: ShapeStyle,
    /// In-flight gesture state.
    gesture: Gesture,
}

impl Editor {
    /// Create a new editor with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor over an existing document.
    pub fn with_scene(scene: SceneDocument) -> Self {
        Self {
            scene,
            ..Self::default()
        }
    }

    /// The currently armed tool.
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// The style new shapes will be drawn with.
    pub fn default_style(&self) -> &ShapeStyle {
        &self.default_style
    }

    /// The current gesture state.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Arm a tool. Any in-flight gesture is discarded.
    pub fn arm_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.gesture = Gesture::Idle;
    }

    /// Handle pointer-down.
    ///
    /// With the select tool armed this hit-tests front to back: a hit
    /// selects the shape and starts a drag, a miss deselects everything.
    /// With a drawing tool armed it starts a draw gesture.
    pub fn pointer_down(&mut self, point: Point) {
        if self.gesture != Gesture::Idle {
            return;
        }
        match self.tool.shape_kind() {
            None => match self.scene.shape_at(point) {
                Some(id) => {
                    self.scene.select_only(Some(id));
                    // select_only just guaranteed the shape exists.
                    if let Some(hit) = self.scene.selected() {
                        self.gesture = Gesture::Dragging {
                            offset: point - hit.anchor,
                        };
                    }
                }
                None => self.scene.select_only(None),
            },
            Some(_) => {
                self.gesture = Gesture::Drawing {
                    anchor: point,
                    current: point,
                };
            }
        }
    }

    /// Handle pointer-move.
    ///
    /// Drawing updates the preview corner; dragging translates the
    /// selected shape so it chases the cursor. The drag delta is computed
    /// against the shape's current anchor each move, not the gesture
    /// start, so each move applies only the remaining displacement.
    pub fn pointer_move(&mut self, point: Point) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Drawing { current, .. } => *current = point,
            Gesture::Dragging { offset } => {
                let offset = *offset;
                if let Some(selected) = self.scene.selected() {
                    let id = selected.id();
                    let delta = (point - offset) - selected.anchor;
                    self.scene.translate(id, delta.x, delta.y);
                }
            }
        }
    }

    /// Handle pointer-up: commit a draw gesture as a fresh shape, or end
    /// a drag. Either way the machine returns to idle.
    pub fn pointer_up(&mut self, point: Point) {
        if let Gesture::Drawing { anchor, .. } = self.gesture {
            if let Some(kind) = self.tool.shape_kind() {
                let shape = Shape::new(kind, anchor, point, self.default_style);
                log::info!("committed {:?} shape {}", kind, shape.id());
                self.scene.add(shape);
            }
        }
        self.gesture = Gesture::Idle;
    }

    /// Discard any in-flight gesture without committing.
    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// The live preview shape for an active draw gesture.
    /// Carries the nil sentinel id and is never part of the document.
    pub fn preview_shape(&self) -> Option<Shape> {
        match self.gesture {
            Gesture::Drawing { anchor, current } => {
                let kind = self.tool.shape_kind()?;
                Some(Shape::preview(kind, anchor, current, self.default_style))
            }
            _ => None,
        }
    }

    /// Apply a style command to the selected shape if one exists,
    /// otherwise to the default style used for the next drawn shape.
    pub fn apply_style(&mut self, command: StyleCommand) {
        match self.scene.selected_id() {
            Some(id) => self.scene.apply_style(id, command),
            None => self.default_style.apply(command),
        }
    }

    /// Delete the selected shape, if any.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.scene.selected_id() {
            self.scene.remove(id);
            log::info!("deleted shape {}", id);
        }
    }

    /// Remove every shape and reset the gesture.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.gesture = Gesture::Idle;
        log::info!("cleared document");
    }

    /// Serialize the document for persistence.
    pub fn snapshot(&self) -> Result<String, serde_json::Error> {
        self.scene.to_json()
    }

    /// Replace the document from a snapshot. On failure the current
    /// document is left untouched and the error is surfaced.
    pub fn load_snapshot(&mut self, json: &str) -> Result<(), DecodeError> {
        let scene = SceneDocument::from_json(json)?;
        log::info!("loaded snapshot with {} shapes", scene.len());
        self.scene = scene;
        self.gesture = Gesture::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{SerializableColor, StrokeStyle};

    fn draw(editor: &mut Editor, tool: ToolKind, from: (f64, f64), to: (f64, f64)) {
        editor.arm_tool(tool);
        editor.pointer_down(Point::new(from.0, from.1));
        editor.pointer_move(Point::new(to.0, to.1));
        editor.pointer_up(Point::new(to.0, to.1));
    }

    #[test]
    fn test_draw_rectangle_commits_shape() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (10.0, 10.0), (60.0, 40.0));

        assert_eq!(editor.scene.len(), 1);
        let shape = &editor.scene.shapes()[0];
        assert_eq!(shape.kind, ShapeKind::Rectangle);
        assert_eq!(shape.anchor, Point::new(10.0, 10.0));
        assert_eq!(shape.corner, Point::new(60.0, 40.0));
        assert!(!shape.selected);
        assert!(!shape.is_preview());
    }

    #[test]
    fn test_preview_during_draw() {
        let mut editor = Editor::new();
        editor.arm_tool(ToolKind::Circle);
        assert!(editor.preview_shape().is_none());

        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(30.0, 30.0));

        let preview = editor.preview_shape().unwrap();
        assert!(preview.is_preview());
        assert_eq!(preview.kind, ShapeKind::Circle);
        assert_eq!(preview.corner, Point::new(30.0, 30.0));
        // Nothing committed while the gesture is live.
        assert!(editor.scene.is_empty());

        editor.pointer_up(Point::new(30.0, 30.0));
        assert!(editor.preview_shape().is_none());
        assert_eq!(editor.scene.len(), 1);
    }

    #[test]
    fn test_cancel_discards_preview() {
        let mut editor = Editor::new();
        editor.arm_tool(ToolKind::Line);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(50.0, 50.0));
        editor.cancel();

        assert!(editor.scene.is_empty());
        assert!(editor.preview_shape().is_none());
        assert_eq!(editor.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_select_click_prefers_topmost() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (0.0, 0.0), (50.0, 50.0));
        draw(&mut editor, ToolKind::Rectangle, (20.0, 20.0), (70.0, 70.0));
        let id2 = editor.scene.shapes()[1].id();

        editor.arm_tool(ToolKind::Select);
        editor.pointer_down(Point::new(30.0, 30.0));
        assert_eq!(editor.scene.selected_id(), Some(id2));
        editor.pointer_up(Point::new(30.0, 30.0));
        // Click-up with the select tool commits nothing.
        assert_eq!(editor.scene.len(), 2);
    }

    #[test]
    fn test_select_click_miss_deselects() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (0.0, 0.0), (50.0, 50.0));
        let id = editor.scene.shapes()[0].id();

        editor.arm_tool(ToolKind::Select);
        editor.pointer_down(Point::new(25.0, 25.0));
        editor.pointer_up(Point::new(25.0, 25.0));
        assert_eq!(editor.scene.selected_id(), Some(id));

        editor.pointer_down(Point::new(500.0, 500.0));
        assert!(editor.scene.selected().is_none());
        assert_eq!(editor.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_drag_translates_only_selected() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (0.0, 0.0), (50.0, 50.0));
        draw(&mut editor, ToolKind::Rectangle, (20.0, 20.0), (70.0, 70.0));
        let id1 = editor.scene.shapes()[0].id();
        let id2 = editor.scene.shapes()[1].id();

        editor.arm_tool(ToolKind::Select);
        editor.pointer_down(Point::new(10.0, 10.0)); // only inside shape 1
        editor.pointer_move(Point::new(15.0, 15.0));
        editor.pointer_up(Point::new(15.0, 15.0));

        let moved = editor.scene.shape(id1).unwrap();
        assert_eq!(moved.anchor, Point::new(5.0, 5.0));
        assert_eq!(moved.corner, Point::new(55.0, 55.0));
        let untouched = editor.scene.shape(id2).unwrap();
        assert_eq!(untouched.anchor, Point::new(20.0, 20.0));
        assert_eq!(untouched.corner, Point::new(70.0, 70.0));
    }

    #[test]
    fn test_drag_accumulates_across_moves() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (0.0, 0.0), (10.0, 10.0));
        let id = editor.scene.shapes()[0].id();

        editor.arm_tool(ToolKind::Select);
        editor.pointer_down(Point::new(5.0, 5.0));
        editor.pointer_move(Point::new(15.0, 5.0));
        editor.pointer_move(Point::new(25.0, 5.0));
        editor.pointer_up(Point::new(25.0, 5.0));

        // Cursor moved +20 in x total; the shape follows exactly.
        assert_eq!(editor.scene.shape(id).unwrap().anchor, Point::new(20.0, 0.0));
    }

    #[test]
    fn test_drag_with_zero_delta_is_noop() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Circle, (0.0, 0.0), (40.0, 40.0));
        let id = editor.scene.shapes()[0].id();

        editor.arm_tool(ToolKind::Select);
        editor.pointer_down(Point::new(20.0, 20.0));
        editor.pointer_move(Point::new(20.0, 20.0));
        editor.pointer_up(Point::new(20.0, 20.0));

        let shape = editor.scene.shape(id).unwrap();
        assert_eq!(shape.anchor, Point::new(0.0, 0.0));
        assert_eq!(shape.corner, Point::new(40.0, 40.0));
    }

    #[test]
    fn test_style_goes_to_selection_else_default() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (0.0, 0.0), (50.0, 50.0));
        let id = editor.scene.shapes()[0].id();

        // Nothing selected: update the default for the next shape.
        editor.apply_style(StyleCommand::SetWidth(9.0));
        assert!((editor.default_style().stroke_width - 9.0).abs() < f64::EPSILON);
        assert!((editor.scene.shape(id).unwrap().style.stroke_width - 2.0).abs() < f64::EPSILON);

        // With a selection: restyle the shape, leave the default alone.
        editor.arm_tool(ToolKind::Select);
        editor.pointer_down(Point::new(25.0, 25.0));
        editor.pointer_up(Point::new(25.0, 25.0));
        editor.apply_style(StyleCommand::SetFill(SerializableColor::white()));
        editor.apply_style(StyleCommand::SetDashStyle(StrokeStyle::Dashed));

        let shape = editor.scene.shape(id).unwrap();
        assert_eq!(shape.style.fill, SerializableColor::white());
        assert_eq!(shape.style.stroke_style, StrokeStyle::Dashed);
        assert_ne!(editor.default_style().fill, SerializableColor::white());
    }

    #[test]
    fn test_new_shape_uses_default_style() {
        let mut editor = Editor::new();
        editor.apply_style(StyleCommand::SetWidth(4.0));
        draw(&mut editor, ToolKind::Line, (0.0, 0.0), (10.0, 10.0));
        assert!((editor.scene.shapes()[0].style.stroke_width - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_delete_selected() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (0.0, 0.0), (50.0, 50.0));

        editor.arm_tool(ToolKind::Select);
        editor.pointer_down(Point::new(25.0, 25.0));
        editor.pointer_up(Point::new(25.0, 25.0));
        editor.delete_selected();
        assert!(editor.scene.is_empty());

        // No selection: a further delete is a no-op.
        editor.delete_selected();
        assert!(editor.scene.is_empty());
    }

    #[test]
    fn test_load_snapshot_failure_keeps_document() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (0.0, 0.0), (50.0, 50.0));

        assert!(editor.load_snapshot("not valid data").is_err());
        assert_eq!(editor.scene.len(), 1);
    }

    #[test]
    fn test_with_scene_starts_idle_over_existing_document() {
        let mut source = Editor::new();
        draw(&mut source, ToolKind::Rectangle, (0.0, 0.0), (50.0, 50.0));

        let editor = Editor::with_scene(source.scene.clone());
        assert_eq!(editor.scene.len(), 1);
        assert_eq!(editor.tool(), ToolKind::Select);
        assert_eq!(editor.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_snapshot_roundtrip_through_editor() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Circle, (10.0, 10.0), (60.0, 40.0));
        let json = editor.snapshot().unwrap();

        let mut other = Editor::new();
        other.load_snapshot(&json).unwrap();
        assert_eq!(other.scene.len(), 1);
        assert_eq!(other.scene.shapes()[0].kind, ShapeKind::Circle);
    }
}
