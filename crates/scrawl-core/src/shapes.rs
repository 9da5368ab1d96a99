//! Shape definitions and the geometry kernel for the drawing surface.

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hit tolerance for lines, in canvas pixels.
pub const LINE_HIT_THRESHOLD: f64 = 5.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` hex string.
    /// Unrecognized input falls back to black.
    pub fn from_hex(hex: &str) -> Self {
        let Some(hex) = hex.strip_prefix('#') else {
            return Self::black();
        };
        let hex = hex.trim();
        if !hex.is_ascii() {
            return Self::black();
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).unwrap_or(0) * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).unwrap_or(0) * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).unwrap_or(0) * 17;
                Self::new(r, g, b, 255)
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                Self::new(r, g, b, 255)
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                let a = u8::from_str_radix(&hex[6..8], 16).unwrap_or(255);
                Self::new(r, g, b, a)
            }
            _ => Self::black(),
        }
    }

    /// Format as `#rrggbb` (or `#rrggbbaa` when not fully opaque).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke dash style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl StrokeStyle {
    /// Cycle to the next stroke style.
    pub fn next(self) -> Self {
        match self {
            StrokeStyle::Solid => StrokeStyle::Dashed,
            StrokeStyle::Dashed => StrokeStyle::Dotted,
            StrokeStyle::Dotted => StrokeStyle::Solid,
        }
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color.
    pub fill: SerializableColor,
    /// Stroke color.
    pub stroke: SerializableColor,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Stroke dash style.
    pub stroke_style: StrokeStyle,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: SerializableColor::from_hex("#3b82f6"),
            stroke: SerializableColor::from_hex("#1e40af"),
            stroke_width: 2.0,
            stroke_style: StrokeStyle::Solid,
        }
    }
}

/// A single styling mutation. Dispatched through [`ShapeStyle::apply`] so
/// every style write goes through one typed surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleCommand {
    SetFill(SerializableColor),
    SetStroke(SerializableColor),
    SetWidth(f64),
    SetDashStyle(StrokeStyle),
}

impl ShapeStyle {
    /// Apply a single style command.
    pub fn apply(&mut self, command: StyleCommand) {
        match command {
            StyleCommand::SetFill(color) => self.fill = color,
            StyleCommand::SetStroke(color) => self.stroke = color,
            StyleCommand::SetWidth(width) => self.stroke_width = width,
            StyleCommand::SetDashStyle(style) => self.stroke_style = style,
        }
    }

    /// Get the fill color as a peniko Color.
    pub fn fill_color(&self) -> Color {
        self.fill.into()
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke_color(&self) -> Color {
        self.stroke.into()
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Kind of drawable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Line,
}

/// A drawn shape: two corner points plus style.
///
/// `anchor` and `corner` carry no ordering requirement; every geometry
/// predicate tolerates `anchor.x > corner.x` and friends. For rectangles
/// they are opposite corners of the box, for circles the box diagonal
/// (center = midpoint, radius = half the diagonal), for lines the two
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    pub kind: ShapeKind,
    pub anchor: Point,
    pub corner: Point,
    pub style: ShapeStyle,
    /// Ephemeral selection flag; at most one shape per document is selected.
    #[serde(default)]
    pub selected: bool,
}

impl Shape {
    /// Create a new shape with a fresh id.
    pub fn new(kind: ShapeKind, anchor: Point, corner: Point, style: ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            anchor,
            corner,
            style,
            selected: false,
        }
    }

    /// Create a transient preview shape carrying the nil sentinel id.
    /// Preview shapes are drawn during an active gesture and never stored.
    pub fn preview(kind: ShapeKind, anchor: Point, corner: Point, style: ShapeStyle) -> Self {
        Self {
            id: Uuid::nil(),
            kind,
            anchor,
            corner,
            style,
            selected: false,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Whether this is the transient preview shape.
    pub fn is_preview(&self) -> bool {
        self.id.is_nil()
    }

    /// Bounding box in canvas coordinates: componentwise min/max of the
    /// two corner points. For lines this is the endpoint bounding box,
    /// used for the selection outline rather than hit-testing.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.anchor.x.min(self.corner.x),
            self.anchor.y.min(self.corner.y),
            self.anchor.x.max(self.corner.x),
            self.anchor.y.max(self.corner.y),
        )
    }

    /// Center of the bounding box (for circles, the circle center).
    pub fn center(&self) -> Point {
        self.anchor.midpoint(self.corner)
    }

    /// Circle radius: half the diagonal of the interaction box.
    pub fn radius(&self) -> f64 {
        self.anchor.distance(self.corner) / 2.0
    }

    /// Check if a point (in canvas coordinates) hits this shape.
    pub fn contains_point(&self, point: Point) -> bool {
        match self.kind {
            ShapeKind::Rectangle => {
                let bounds = self.bounds();
                point.x >= bounds.x0
                    && point.x <= bounds.x1
                    && point.y >= bounds.y0
                    && point.y <= bounds.y1
            }
            ShapeKind::Circle => point.distance(self.center()) <= self.radius(),
            ShapeKind::Line => {
                point_to_infinite_line_dist(point, self.anchor, self.corner)
                    <= LINE_HIT_THRESHOLD
            }
        }
    }

    /// Shift both corner points by `(dx, dy)`. No clamping; shapes may
    /// leave the visible canvas.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.anchor.x += dx;
        self.anchor.y += dy;
        self.corner.x += dx;
        self.corner.y += dy;
    }
}

/// Distance from a point to the infinite line through `a` and `b`.
///
/// Line hits use the infinite carrier line rather than the segment: a
/// point far past either endpoint still registers when it lies within
/// the threshold of the line. Degenerate zero-length lines fall back to
/// plain point distance.
pub fn point_to_infinite_line_dist(point: Point, a: Point, b: Point) -> f64 {
    let ca = b.y - a.y;
    let cb = a.x - b.x;
    let cc = b.x * a.y - a.x * b.y;
    let denom = (ca * ca + cb * cb).sqrt();
    if denom < f64::EPSILON {
        return point.distance(a);
    }
    (ca * point.x + cb * point.y + cc).abs() / denom
}
