//! File-based storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::scene::SceneDocument;
use std::fs;
use std::path::PathBuf;

/// File-based storage.
///
/// Stores each snapshot as a JSON file in a base directory, one file per
/// key.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the platform data directory
    /// (`~/.local/share/scrawl/snapshots/` on Linux).
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("could not determine home directory".to_string()))?;
        Self::new(base.join("scrawl").join("snapshots"))
    }

    /// Get the file path for a snapshot key.
    fn snapshot_path(&self, key: &str) -> PathBuf {
        // Sanitize the key to be safe for filenames.
        let safe_key: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_key))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl Storage for FileStorage {
    /// Writes go to a sibling temp file first and are renamed into place,
    /// so a crash mid-write never clobbers the previous snapshot.
    fn save(&self, key: &str, document: &SceneDocument) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.snapshot_path(key);
        let tmp = path.with_extension("json.tmp");
        let json = match document.to_json() {
            Ok(j) => j,
            Err(e) => return Box::pin(async move { Err(StorageError::Serialization(e)) }),
        };

        Box::pin(async move {
            fs::write(&tmp, json)
                .map_err(|e| StorageError::Io(format!("failed to write {}: {}", tmp.display(), e)))?;
            fs::rename(&tmp, &path)
                .map_err(|e| StorageError::Io(format!("failed to commit {}: {}", path.display(), e)))
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<SceneDocument>> {
        let path = self.snapshot_path(key);
        let key_owned = key.to_string();

        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(key_owned));
            }

            let json = fs::read_to_string(&path)
                .map_err(|e| StorageError::Io(format!("failed to read {}: {}", path.display(), e)))?;

            Ok(SceneDocument::from_json(&json)?)
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.snapshot_path(key);

        Box::pin(async move {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    StorageError::Io(format!("failed to delete {}: {}", path.display(), e))
                })?;
            }
            Ok(())
        })
    }

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let path = self.snapshot_path(key);
        Box::pin(async move { Ok(path.exists()) })
    }
}
