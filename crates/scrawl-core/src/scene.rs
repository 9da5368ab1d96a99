//! Scene document: the ordered shape collection and its snapshot codec.

use crate::shapes::{Shape, ShapeId, StyleCommand};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot decoding failed; the caller's document is left untouched.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The ordered collection of committed shapes.
///
/// Index order is z-order: later shapes draw on top and win hit-testing.
/// At most one shape is selected at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDocument {
    shapes: Vec<Shape>,
}

impl SceneDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape at the top of the z-order.
    /// A shape whose id already exists in the document is dropped.
    pub fn add(&mut self, shape: Shape) {
        if self.shapes.iter().any(|s| s.id() == shape.id()) {
            log::warn!("ignoring shape with duplicate id {}", shape.id());
            return;
        }
        self.shapes.push(shape);
    }

    /// Replace the entire shape sequence (used by snapshot load).
    /// Any previous selection is gone with the old shapes.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    /// Remove a shape. Unknown ids are a no-op.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let pos = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(pos))
    }

    /// Mark the matching shape selected and deselect all others.
    /// `None` or an unknown id leaves nothing selected.
    pub fn select_only(&mut self, id: Option<ShapeId>) {
        for shape in &mut self.shapes {
            shape.selected = id == Some(shape.id());
        }
    }

    /// Shift the matching shape by `(dx, dy)`. Unknown ids are a no-op.
    pub fn translate(&mut self, id: ShapeId, dx: f64, dy: f64) {
        if let Some(shape) = self.shape_mut(id) {
            shape.translate(dx, dy);
        }
    }

    /// Apply a style command to the matching shape. Unknown ids are a no-op.
    pub fn apply_style(&mut self, id: ShapeId, command: StyleCommand) {
        if let Some(shape) = self.shape_mut(id) {
            shape.style.apply(command);
        }
    }

    /// Remove every shape (selection goes with them).
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Get a shape by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// The currently selected shape, if any.
    pub fn selected(&self) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.selected)
    }

    /// Id of the currently selected shape, if any.
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected().map(|s| s.id())
    }

    /// Topmost shape containing the point, searched front to back.
    pub fn shape_at(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.contains_point(point))
            .map(|s| s.id())
    }

    /// Shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Serialize the shape sequence to JSON, order and attributes preserved.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.shapes)
    }

    /// Decode a snapshot into a new document.
    ///
    /// Selection is ephemeral UI state, not drawing content: every decoded
    /// shape comes back deselected regardless of what the snapshot says.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let mut shapes: Vec<Shape> = serde_json::from_str(json)?;
        for shape in &mut shapes {
            shape.selected = false;
        }
        Ok(Self { shapes })
    }
}
