//! Resize handle derivation for selected shapes.
//!
//! Handles are derived from a shape's current geometry every time they
//! are needed; they are never stored or persisted.

use crate::shapes::{Shape, ShapeKind};
use kurbo::Point;

/// Handle square side length in canvas pixels.
pub const HANDLE_SIZE: f64 = 6.0;

/// Compass direction of a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// A resize handle with its position and compass tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in canvas coordinates.
    pub position: Point,
    /// Compass direction.
    pub kind: HandleKind,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }
}

/// Get the resize handles for a shape.
///
/// Lines expose only their two endpoints, tagged NorthWest/SouthEast.
/// Rectangles and circles expose eight handles: the four corners of the
/// bounding box plus the four edge midpoints.
pub fn resize_handles(shape: &Shape) -> Vec<Handle> {
    if shape.kind == ShapeKind::Line {
        return vec![
            Handle::new(shape.anchor, HandleKind::NorthWest),
            Handle::new(shape.corner, HandleKind::SouthEast),
        ];
    }

    let bounds = shape.bounds();
    let mid_x = (bounds.x0 + bounds.x1) / 2.0;
    let mid_y = (bounds.y0 + bounds.y1) / 2.0;

    vec![
        Handle::new(Point::new(bounds.x0, bounds.y0), HandleKind::NorthWest),
        Handle::new(Point::new(mid_x, bounds.y0), HandleKind::North),
        Handle::new(Point::new(bounds.x1, bounds.y0), HandleKind::NorthEast),
        Handle::new(Point::new(bounds.x1, mid_y), HandleKind::East),
        Handle::new(Point::new(bounds.x1, bounds.y1), HandleKind::SouthEast),
        Handle::new(Point::new(mid_x, bounds.y1), HandleKind::South),
        Handle::new(Point::new(bounds.x0, bounds.y1), HandleKind::SouthWest),
        Handle::new(Point::new(bounds.x0, mid_y), HandleKind::West),
    ]
}
