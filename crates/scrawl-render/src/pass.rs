//! Scene render pass.
//!
//! A pure pull pass: reads the document and the in-flight preview shape,
//! emits draw primitives to a backend. Never mutates editor state; hosts
//! invoke it whenever they decide the surface is dirty.

use crate::backend::{dash_pattern, DrawBackend};
use kurbo::Rect;
use peniko::Color;
use scrawl_core::{resize_handles, SceneDocument, Shape, ShapeKind, HANDLE_SIZE};

/// Selection accent color (red).
pub const SELECTION_COLOR: Color = Color::from_rgb8(0xef, 0x44, 0x44);
/// Handle fill color (white).
pub const HANDLE_FILL_COLOR: Color = Color::from_rgb8(0xff, 0xff, 0xff);
/// Gap between a selected shape's bounds and its outline, in pixels.
pub const SELECTION_OUTLINE_PAD: f64 = 5.0;
/// Dash pattern of the selection outline: 5 px on, 5 px off.
pub const SELECTION_DASH: &[f64] = &[5.0, 5.0];
/// Stroke width of the selection outline and handle borders.
pub const SELECTION_STROKE_WIDTH: f64 = 1.0;

/// Paint the committed shapes in z-order, then the preview on top.
pub fn draw_scene(scene: &SceneDocument, preview: Option<&Shape>, backend: &mut dyn DrawBackend) {
    for shape in scene.shapes() {
        draw_shape(shape, backend);
    }
    if let Some(preview) = preview {
        draw_shape(preview, backend);
    }
}

/// Paint one shape: fill before stroke, then the selection overlay if the
/// shape is selected.
pub fn draw_shape(shape: &Shape, backend: &mut dyn DrawBackend) {
    let style = &shape.style;
    let dash = dash_pattern(style.stroke_style);

    match shape.kind {
        ShapeKind::Rectangle => {
            let rect = shape.bounds();
            backend.fill_rect(rect, style.fill_color());
            backend.stroke_rect(rect, style.stroke_color(), style.stroke_width, dash);
        }
        ShapeKind::Circle => {
            backend.fill_circle(shape.center(), shape.radius(), style.fill_color());
            backend.stroke_circle(
                shape.center(),
                shape.radius(),
                style.stroke_color(),
                style.stroke_width,
                dash,
            );
        }
        ShapeKind::Line => {
            backend.stroke_segment(
                shape.anchor,
                shape.corner,
                style.stroke_color(),
                style.stroke_width,
                dash,
            );
        }
    }

    if shape.selected {
        draw_selection_overlay(shape, backend);
    }
}

/// Dashed outline 5 px outside the shape's bounding box plus a square
/// handle at each resize-handle position (white fill, red border).
fn draw_selection_overlay(shape: &Shape, backend: &mut dyn DrawBackend) {
    let outline = shape
        .bounds()
        .inflate(SELECTION_OUTLINE_PAD, SELECTION_OUTLINE_PAD);
    backend.stroke_rect(outline, SELECTION_COLOR, SELECTION_STROKE_WIDTH, SELECTION_DASH);

    for handle in resize_handles(shape) {
        let half = HANDLE_SIZE / 2.0;
        let square = Rect::new(
            handle.position.x - half,
            handle.position.y - half,
            handle.position.x + half,
            handle.position.y + half,
        );
        backend.fill_rect(square, HANDLE_FILL_COLOR);
        backend.stroke_rect(square, SELECTION_COLOR, SELECTION_STROKE_WIDTH, &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::{DisplayList, DrawCommand};
    use kurbo::Point;
    use scrawl_core::{Editor, ShapeStyle, StrokeStyle, ToolKind};

    fn draw(editor: &mut Editor, tool: ToolKind, from: (f64, f64), to: (f64, f64)) {
        editor.arm_tool(tool);
        editor.pointer_down(Point::new(from.0, from.1));
        editor.pointer_up(Point::new(to.0, to.1));
    }

    #[test]
    fn test_fill_precedes_stroke() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (0.0, 0.0), (50.0, 50.0));

        let mut list = DisplayList::new();
        draw_scene(&editor.scene, None, &mut list);

        assert_eq!(list.commands().len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::StrokeRect { .. }));
    }

    #[test]
    fn test_line_is_stroke_only() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Line, (0.0, 0.0), (50.0, 0.0));

        let mut list = DisplayList::new();
        draw_scene(&editor.scene, None, &mut list);

        assert_eq!(list.commands().len(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::StrokeSegment { .. }));
    }

    #[test]
    fn test_preview_paints_last() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Circle, (0.0, 0.0), (40.0, 40.0));

        editor.arm_tool(ToolKind::Rectangle);
        editor.pointer_down(Point::new(100.0, 100.0));
        editor.pointer_move(Point::new(150.0, 150.0));
        let preview = editor.preview_shape().unwrap();

        let mut list = DisplayList::new();
        draw_scene(&editor.scene, Some(&preview), &mut list);

        // Circle fill+stroke, then preview rectangle fill+stroke on top.
        assert_eq!(list.commands().len(), 4);
        assert!(matches!(list.commands()[2], DrawCommand::FillRect { .. }));
        assert!(matches!(list.commands()[3], DrawCommand::StrokeRect { .. }));
    }

    #[test]
    fn test_selection_overlay_emits_outline_and_handles() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Rectangle, (10.0, 10.0), (60.0, 40.0));
        let id = editor.scene.shapes()[0].id();
        editor.scene.select_only(Some(id));

        let mut list = DisplayList::new();
        draw_scene(&editor.scene, None, &mut list);

        // Shape fill+stroke, outline, then 8 handles at 2 commands each.
        assert_eq!(list.commands().len(), 2 + 1 + 16);

        let DrawCommand::StrokeRect { rect, color, dash, .. } = &list.commands()[2] else {
            panic!("expected selection outline");
        };
        assert_eq!(*rect, Rect::new(5.0, 5.0, 65.0, 45.0));
        assert_eq!(*color, scrawl_core::SerializableColor::from(SELECTION_COLOR));
        assert_eq!(dash, SELECTION_DASH);
    }

    #[test]
    fn test_selected_line_gets_two_handles() {
        let mut editor = Editor::new();
        draw(&mut editor, ToolKind::Line, (0.0, 0.0), (30.0, 30.0));
        let id = editor.scene.shapes()[0].id();
        editor.scene.select_only(Some(id));

        let mut list = DisplayList::new();
        draw_scene(&editor.scene, None, &mut list);

        // Segment, outline, 2 handles at 2 commands each.
        assert_eq!(list.commands().len(), 1 + 1 + 4);
    }

    #[test]
    fn test_dash_style_reaches_backend() {
        let mut shape = Shape::new(
            ShapeKind::Line,
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            ShapeStyle::default(),
        );
        shape.style.stroke_style = StrokeStyle::Dashed;

        let mut list = DisplayList::new();
        draw_shape(&shape, &mut list);

        let DrawCommand::StrokeSegment { dash, .. } = &list.commands()[0] else {
            panic!("expected segment");
        };
        assert_eq!(dash, &[10.0, 5.0]);
    }
}
