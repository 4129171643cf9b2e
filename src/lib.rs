// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed key-path access to hierarchical configuration documents.
//!
//! This crate reads and writes application configuration kept in a single JSON (or
//! YAML) file. Values are addressed by a path of nested object keys, such as
//! `["server", "port"]` for `{"server": {"port": 8080}}`, and converted to and from
//! native Rust types on the way in and out.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`KeyPath`, `NodeKind`, the `FromNode`/`IntoNode`
//!   conversion traits, errors)
//! - **Ports**: Trait definitions for the collaborators (`DocumentNode`,
//!   `DocumentEngine`, `Storage`)
//! - **Adapters**: Implementations for specific tree libraries and storages
//! - **Service**: The navigation algorithms and the `ConfigReader` that ties
//!   everything together
//!
//! # Features
//!
//! - **Typed Accessors**: `has`, `get`, `get_or_default`, `set` and `set_deep` for
//!   booleans, integers of every width, strings, paths, and `Vec`/`VecDeque`/
//!   `BTreeSet`/`HashSet` collections of those
//! - **Shallow and Deep Writes**: `set` requires intermediate objects to exist,
//!   `set_deep` creates them
//! - **Safe Bootstrap**: reading a missing file creates it holding `{}`
//! - **Extensible**: Add a tree library by implementing `DocumentEngine`
//!
//! # Feature Flags
//!
//! - `json`: Enable the `serde_json` engine (default)
//! - `yaml`: Enable the `serde_yaml` engine
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use treecfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut config = JsonConfigReader::new("config.json");
//! config.read()?;
//!
//! if !config.has::<u16>(["server", "port"]) {
//!     config.set_deep(8080_u16, ["server", "port"])?;
//! }
//! let name = config.get_or_default("demo".to_string(), "name");
//! println!("{} listens on {}", name, config.get::<u16>(["server", "port"])?);
//!
//! config.write(4)?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FileStorage, MemoryStorage};
    pub use crate::domain::{ConfigError, FromNode, IntoNode, KeyPath, NodeKind, Result};
    pub use crate::ports::{DocumentEngine, DocumentNode, Storage};
    pub use crate::service::ConfigReader;

    // Re-export engines based on feature flags
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonEngine;
    #[cfg(feature = "json")]
    pub use crate::service::JsonConfigReader;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlEngine;
    #[cfg(feature = "yaml")]
    pub use crate::service::YamlConfigReader;
}
