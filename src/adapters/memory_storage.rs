// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory storage adapter.
//!
//! Useful for tests and for embedding a configuration document without touching
//! the filesystem. Clones share the same underlying map, so one clone can be handed
//! to a reader while another inspects what was written.

use crate::domain::{ConfigError, Result};
use crate::ports::Storage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Storage adapter that keeps file contents in a shared map.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::MemoryStorage;
/// use treecfg::ports::Storage;
/// use std::path::Path;
///
/// let storage = MemoryStorage::new().with_file("app.json", "{\"debug\": true}");
/// let view = storage.clone();
///
/// storage.write_all(Path::new("other.json"), b"{}").unwrap();
/// assert!(view.exists(Path::new("other.json")));
/// assert_eq!(view.contents("app.json").as_deref(), Some("{\"debug\": true}"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file to the storage.
    ///
    /// A lock poisoned by a panicking clone is recovered, so the file is always added.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), content.into());
        self
    }

    /// Returns the stored content at `path` as text, if present and valid UTF-8.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let files = self.files.read().ok()?;
        let bytes = files.get(path.as_ref())?;
        String::from_utf8(bytes.clone()).ok()
    }

    fn lock_error(path: &Path) -> ConfigError {
        ConfigError::StorageError {
            location: path.display().to_string(),
            message: "In-memory storage lock poisoned".to_string(),
            source: None,
        }
    }
}

impl Storage for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }

    fn read_all(&self, path: &Path) -> Result<Vec<u8>> {
        let files = self.files.read().map_err(|_| Self::lock_error(path))?;
        files
            .get(path)
            .cloned()
            .ok_or_else(|| ConfigError::StorageError {
                location: path.display().to_string(),
                message: "No such file".to_string(),
                source: None,
            })
    }

    fn write_all(&self, path: &Path, content: &[u8]) -> Result<()> {
        let mut files = self.files.write().map_err(|_| Self::lock_error(path))?;
        files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}
