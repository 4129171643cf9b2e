// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem storage adapter.
//!
//! This module provides the storage used by default: every call opens the file,
//! does its work, and closes it again before returning.

use crate::domain::{ConfigError, Result};
use crate::ports::Storage;
use std::fs;
use std::path::Path;

/// Maximum allowed file size for configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Storage adapter backed by the local filesystem.
///
/// # Examples
///
/// ```rust,no_run
/// use treecfg::adapters::FileStorage;
/// use treecfg::ports::Storage;
/// use std::path::Path;
///
/// let storage = FileStorage::new();
/// let content = storage.read_all(Path::new("/etc/myapp/config.json")).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileStorage;

impl FileStorage {
    /// Creates a new filesystem storage.
    pub fn new() -> Self {
        FileStorage
    }

    fn storage_error(path: &Path, message: &str, err: std::io::Error) -> ConfigError {
        ConfigError::StorageError {
            location: path.display().to_string(),
            message: message.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl Storage for FileStorage {
    fn name(&self) -> &str {
        "file"
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_all(&self, path: &Path) -> Result<Vec<u8>> {
        // Check file size before reading to prevent DoS via large files
        let metadata = fs::metadata(path)
            .map_err(|e| Self::storage_error(path, "Failed to read file metadata", e))?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::StorageError {
                location: path.display().to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
                source: None,
            });
        }

        fs::read(path).map_err(|e| Self::storage_error(path, "Failed to read configuration file", e))
    }

    fn write_all(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Self::storage_error(parent, "Failed to create configuration directory", e)
            })?;
        }

        fs::write(path, content)
            .map_err(|e| Self::storage_error(path, "Failed to write configuration file", e))
    }
}
