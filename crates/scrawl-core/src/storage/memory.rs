//! In-memory storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::scene::SceneDocument;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    snapshots: RwLock<HashMap<String, SceneDocument>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, document: &SceneDocument) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        let document = document.clone();
        Box::pin(async move {
            let mut snapshots = self
                .snapshots
                .write()
                .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
            snapshots.insert(key, document);
            Ok(())
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<SceneDocument>> {
        let key = key.to_string();
        Box::pin(async move {
            let snapshots = self
                .snapshots
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
            snapshots
                .get(&key)
                .cloned()
                .ok_or(StorageError::NotFound(key))
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        Box::pin(async move {
            let mut snapshots = self
                .snapshots
                .write()
                .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
            snapshots.remove(&key);
            Ok(())
        })
    }

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let key = key.to_string();
        Box::pin(async move {
            let snapshots = self
                .snapshots
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
            Ok(snapshots.contains_key(&key))
        })
    }
}
