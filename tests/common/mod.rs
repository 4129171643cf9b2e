// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use treecfg::domain::{ConfigError, Result};
use treecfg::ports::Storage;

static TRACING: Once = Once::new();

/// Installs a test tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Creates a temporary directory and returns it with a config file path inside it.
///
/// The file itself is not created. Keep the `TempDir` alive for the duration of
/// the test.
#[allow(dead_code)]
pub fn temp_config_path(filename: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join(filename);
    (dir, path)
}

/// A storage whose reads and writes always fail.
///
/// `exists` reports whatever it was constructed with, so tests can drive both the
/// bootstrap branch and the plain read branch of `ConfigReader::read`.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct FailingStorage {
    exists: bool,
}

#[allow(dead_code)]
impl FailingStorage {
    /// Creates a failing storage that claims every file exists.
    pub fn existing() -> Self {
        Self { exists: true }
    }

    /// Creates a failing storage that claims no file exists.
    pub fn missing() -> Self {
        Self { exists: false }
    }

    fn failure(path: &Path, operation: &str) -> ConfigError {
        ConfigError::StorageError {
            location: path.display().to_string(),
            message: format!("simulated {} failure", operation),
            source: None,
        }
    }
}

impl Storage for FailingStorage {
    fn name(&self) -> &str {
        "failing"
    }

    fn exists(&self, _path: &Path) -> bool {
        self.exists
    }

    fn read_all(&self, path: &Path) -> Result<Vec<u8>> {
        Err(Self::failure(path, "read"))
    }

    fn write_all(&self, path: &Path, _content: &[u8]) -> Result<()> {
        Err(Self::failure(path, "write"))
    }
}
