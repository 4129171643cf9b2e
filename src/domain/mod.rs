// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the core domain types for the configuration crate: how a
//! location in a document is named, what kinds of node a document holds, how native
//! values map onto those nodes, and the errors that can occur along the way.

pub mod config_type;
pub mod errors;
pub mod key_path;
pub mod node_kind;

// Re-export commonly used types
pub use config_type::{FromNode, IntoNode};
pub use errors::{ConfigError, Result};
pub use key_path::KeyPath;
pub use node_kind::NodeKind;
