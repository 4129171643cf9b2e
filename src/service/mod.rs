// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration reader.
//!
//! This module contains the key-path navigation algorithms and the `ConfigReader`
//! built on them, which provides the main interface for accessing configuration
//! values.

pub mod config_reader;
pub mod navigation;

// Re-export commonly used types
pub use config_reader::ConfigReader;
#[cfg(feature = "json")]
pub use config_reader::JsonConfigReader;
#[cfg(feature = "yaml")]
pub use config_reader::YamlConfigReader;
