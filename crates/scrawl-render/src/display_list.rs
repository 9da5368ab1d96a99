//! Recording backend: captures draw primitives instead of painting.
//!
//! Used by tests to assert on what a frame would paint, and usable by
//! hosts that replay primitives into their own 2D context. Colors are
//! recorded as [`SerializableColor`] so commands stay comparable.

use crate::backend::DrawBackend;
use kurbo::{Point, Rect};
use peniko::Color;
use scrawl_core::SerializableColor;

/// A recorded draw primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: SerializableColor,
    },
    StrokeRect {
        rect: Rect,
        color: SerializableColor,
        width: f64,
        dash: Vec<f64>,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: SerializableColor,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: SerializableColor,
        width: f64,
        dash: Vec<f64>,
    },
    StrokeSegment {
        a: Point,
        b: Point,
        color: SerializableColor,
        width: f64,
        dash: Vec<f64>,
    },
}

/// A backend that records every primitive in submission order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawBackend for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.into(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64, dash: &[f64]) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color: color.into(),
            width,
            dash: dash.to_vec(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.into(),
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64, dash: &[f64]) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color: color.into(),
            width,
            dash: dash.to_vec(),
        });
    }

    fn stroke_segment(&mut self, a: Point, b: Point, color: Color, width: f64, dash: &[f64]) {
        self.commands.push(DrawCommand::StrokeSegment {
            a,
            b,
            color: color.into(),
            width,
            dash: dash.to_vec(),
        });
    }
}
