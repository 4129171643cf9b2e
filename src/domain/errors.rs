// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when navigating a configuration
//! document, converting its nodes to native types, or moving it to and from storage.
//! All errors use `thiserror` for proper error handling and conversion.

use crate::domain::key_path::KeyPath;
use crate::domain::node_kind::NodeKind;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// The variants fall into two groups. Lookup failures (`MissingKey`, `WrongNodeKind`)
/// are absorbed by the `has`/`get_or_default` family of accessors. Everything else
/// is surfaced to the caller unchanged. The enum is marked as `#[non_exhaustive]`
/// to allow for future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use treecfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::MissingKey {
///         path: "server.port".to_string(),
///         segment: "port".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A key path with zero segments was supplied.
    #[error("Key path must contain at least one segment")]
    EmptyPath,

    /// A read-style navigation hit an absent member.
    #[error("Configuration key not found: '{segment}' in path {path}")]
    MissingKey {
        /// The full path being resolved
        path: String,
        /// The segment that was absent
        segment: String,
    },

    /// The node found is not structurally compatible with the requested operation.
    #[error("Node at {path} is {found}, expected {expected}")]
    WrongNodeKind {
        /// The path of the offending node
        path: String,
        /// What the operation required
        expected: String,
        /// What was actually found
        found: NodeKind,
    },

    /// A shallow set was attempted through a missing intermediate object.
    #[error("Cannot set {path}: intermediate object '{segment}' does not exist")]
    InvalidPathSegment {
        /// The full path being written
        path: String,
        /// The first intermediate segment that was absent
        segment: String,
    },

    /// A native value has no lossless representation in the document.
    #[error("Value of type {type_name} for {path} cannot be represented in the document")]
    UnrepresentableValue {
        /// The path being written
        path: String,
        /// The native type name
        type_name: String,
    },

    /// An error occurred in the backing storage.
    #[error("Storage error for '{location}': {message}")]
    StorageError {
        /// The storage location (usually a file path)
        location: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse the document content.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to serialize the document.
    #[error("Failed to serialize configuration: {message}")]
    SerializeError {
        /// The error message
        message: String,
        /// The underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `MissingKey` error for `segment` within `path`.
    pub fn missing_key(path: &KeyPath, segment: &str) -> Self {
        ConfigError::MissingKey {
            path: path.to_string(),
            segment: segment.to_string(),
        }
    }

    /// Creates a `WrongNodeKind` error.
    pub fn wrong_node_kind(path: &KeyPath, expected: impl Into<String>, found: NodeKind) -> Self {
        ConfigError::WrongNodeKind {
            path: path.to_string(),
            expected: expected.into(),
            found,
        }
    }

    /// Creates an `InvalidPathSegment` error for `segment` within `path`.
    pub fn invalid_path_segment(path: &KeyPath, segment: &str) -> Self {
        ConfigError::InvalidPathSegment {
            path: path.to_string(),
            segment: segment.to_string(),
        }
    }

    /// Returns true for failures that mean "no usable value at this path".
    ///
    /// `ConfigReader::has` and `ConfigReader::get_or_default` turn these into `false`
    /// or the fallback value without logging above debug level.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            ConfigError::EmptyPath
                | ConfigError::MissingKey { .. }
                | ConfigError::WrongNodeKind { .. }
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
