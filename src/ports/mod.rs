// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions (interfaces).
//!
//! This module defines the traits that adapters must implement. The config reader
//! talks to a tree library through `DocumentEngine`/`DocumentNode` and to the
//! backing file through `Storage`.

pub mod document;
pub mod storage;

// Re-export commonly used traits
pub use document::{DocumentEngine, DocumentNode};
pub use storage::Storage;
