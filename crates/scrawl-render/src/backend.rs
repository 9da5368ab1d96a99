//! Draw backend abstraction.
//!
//! The core decides what geometry and style to submit; actual pixel
//! painting happens behind this trait. Implementations can target a GPU
//! scene graph, a 2D raster context, or a recording display list.

use kurbo::{Point, Rect};
use peniko::Color;
use scrawl_core::StrokeStyle;

/// Dash pattern for a solid stroke (continuous).
pub const DASH_SOLID: &[f64] = &[];
/// Dash pattern for a dashed stroke: 10 px on, 5 px off.
pub const DASH_DASHED: &[f64] = &[10.0, 5.0];
/// Dash pattern for a dotted stroke: 2 px on, 3 px off.
pub const DASH_DOTTED: &[f64] = &[2.0, 3.0];

/// Get the dash pattern for a stroke style.
pub fn dash_pattern(style: StrokeStyle) -> &'static [f64] {
    match style {
        StrokeStyle::Solid => DASH_SOLID,
        StrokeStyle::Dashed => DASH_DASHED,
        StrokeStyle::Dotted => DASH_DOTTED,
    }
}

/// Trait for drawing backends.
///
/// Fill primitives paint before stroke primitives for the same shape;
/// the render pass guarantees that ordering.
pub trait DrawBackend {
    /// Paint a filled axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke an axis-aligned rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64, dash: &[f64]);

    /// Paint a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64, dash: &[f64]);

    /// Stroke a line segment.
    fn stroke_segment(&mut self, a: Point, b: Point, color: Color, width: f64, dash: &[f64]);
}
