// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document engine and storage implementations.
//!
//! This module contains concrete implementations of the traits defined in the ports
//! layer: one document engine per supported tree library, and the storages that move
//! documents to and from their backing files.

pub mod file_storage;
#[cfg(feature = "json")]
pub mod json;
pub mod memory_storage;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
pub use file_storage::FileStorage;
#[cfg(feature = "json")]
pub use json::JsonEngine;
pub use memory_storage::MemoryStorage;
#[cfg(feature = "yaml")]
pub use yaml::YamlEngine;
