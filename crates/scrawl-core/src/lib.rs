//! Scrawl Core Library
//!
//! Shape model, geometric hit-testing and the pointer interaction engine
//! for the Scrawl drawing surface. Rendering and persistence transports
//! live behind trait seams; this crate only decides what to draw and
//! what to store.

pub mod editor;
pub mod handles;
pub mod scene;
pub mod shapes;
pub mod storage;

pub use editor::{Editor, Gesture, ToolKind};
pub use handles::{resize_handles, Handle, HandleKind, HANDLE_SIZE};
pub use scene::{DecodeError, SceneDocument};
pub use shapes::{
    SerializableColor, Shape, ShapeId, ShapeKind, ShapeStyle, StrokeStyle, StyleCommand,
};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, SCENE_KEY};
