//! Storage abstraction for snapshot persistence.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::scene::{DecodeError, SceneDocument};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Fixed key identifying the drawing's snapshot slot.
pub const SCENE_KEY: &str = "drawing-state";

/// Storage errors. Surfaced once to the caller; nothing is retried.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("snapshot not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("io error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async storage operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for snapshot storage backends.
///
/// Implementations can keep snapshots in memory, on the filesystem, or in
/// any key-value store. Callers drive the returned futures; the core never
/// blocks on its own.
pub trait Storage: Send + Sync {
    /// Save a document under a key.
    fn save(&self, key: &str, document: &SceneDocument) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the document stored under a key.
    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<SceneDocument>>;

    /// Delete the snapshot under a key.
    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// Check if a snapshot exists under a key.
    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

#[cfg(test)]
pub(crate) fn block_on<F: std::future::Future>(f: F) -> F::Output {
    // Trivial blocking executor for storage tests.
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}
