// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage trait definition.
//!
//! This module defines the `Storage` trait, the port through which the config reader
//! moves whole documents to and from their backing store. Implementations see raw
//! bytes only; parsing belongs to the document engine.

use crate::domain::Result;
use std::path::Path;

/// A byte store addressed by filesystem-like paths.
///
/// Each call is self-contained: implementations must not hold handles open between
/// calls, and `write_all` replaces the previous content entirely.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::MemoryStorage;
/// use treecfg::ports::Storage;
/// use std::path::Path;
///
/// let storage = MemoryStorage::new();
/// let path = Path::new("app.json");
/// assert!(!storage.exists(path));
///
/// storage.write_all(path, b"{}\n").unwrap();
/// assert_eq!(storage.read_all(path).unwrap(), b"{}\n");
/// ```
pub trait Storage {
    /// Returns the name of this storage, used in logs and error messages.
    fn name(&self) -> &str;

    /// Returns true if something is stored at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the complete content stored at `path`.
    fn read_all(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replaces the content stored at `path`, creating it if needed.
    fn write_all(&self, path: &Path, content: &[u8]) -> Result<()>;
}
