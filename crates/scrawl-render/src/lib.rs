//! Scrawl Render Library
//!
//! Backend abstraction and render pass for the Scrawl drawing surface.
//! The pass reads editor state and emits draw primitives; it never owns
//! or mutates that state.

pub mod backend;
pub mod display_list;
pub mod export;
pub mod pass;

pub use backend::{dash_pattern, DrawBackend, DASH_DASHED, DASH_DOTTED, DASH_SOLID};
pub use display_list::{DisplayList, DrawCommand};
pub use export::{export_png, ExportError, RasterSurface};
pub use pass::{
    draw_scene, draw_shape, HANDLE_FILL_COLOR, SELECTION_COLOR, SELECTION_DASH,
    SELECTION_OUTLINE_PAD, SELECTION_STROKE_WIDTH,
};
