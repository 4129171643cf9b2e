// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key path newtype for addressing nodes inside a configuration document.
//!
//! This module provides the `KeyPath` type, an ordered sequence of string segments
//! where each segment names a member of an object one level deeper than the last.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of object keys identifying one node in a document.
///
/// `KeyPath` values are normally built implicitly: every accessor on the config
/// reader takes `impl Into<KeyPath>`, so a single `&str`, an array or slice of
/// string-likes, or a `Vec` of them can be passed directly.
///
/// A path is expected to hold at least one segment. Conversions never fail; the
/// length is checked when the path reaches an operation, which reports
/// `ConfigError::EmptyPath` for an empty one.
///
/// # Examples
///
/// ```
/// use treecfg::domain::key_path::KeyPath;
///
/// let path = KeyPath::from(["server", "port"]);
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.to_string(), "server.port");
///
/// let single = KeyPath::from("name");
/// assert_eq!(single.segments(), ["name"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Creates a new `KeyPath` from owned segments.
    pub fn new(segments: Vec<String>) -> Self {
        KeyPath(segments)
    }

    /// Splits a dot-separated string into segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecfg::domain::key_path::KeyPath;
    ///
    /// let path = KeyPath::from_dotted("database.connection.host");
    /// assert_eq!(path.segments(), ["database", "connection", "host"]);
    /// ```
    pub fn from_dotted(dotted: &str) -> Self {
        KeyPath(dotted.split('.').map(str::to_string).collect())
    }

    /// Returns the segments as a slice.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the final segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Returns a new path with `segment` appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecfg::domain::key_path::KeyPath;
    ///
    /// let server = KeyPath::from("server");
    /// assert_eq!(server.join("port").to_string(), "server.port");
    /// ```
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        KeyPath(segments)
    }

    /// Returns the path made of the first `len` segments.
    pub fn prefix(&self, len: usize) -> Self {
        KeyPath(self.0[..len.min(self.0.len())].to_vec())
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Converts the `KeyPath` into its inner segments.
    pub fn into_segments(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath(vec![s.to_string()])
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        KeyPath(vec![s])
    }
}

impl<S: AsRef<str>> From<Vec<S>> for KeyPath {
    fn from(segments: Vec<S>) -> Self {
        KeyPath(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for KeyPath {
    fn from(segments: &[S]) -> Self {
        KeyPath(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for KeyPath {
    fn from(segments: [S; N]) -> Self {
        KeyPath(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<&[S; N]> for KeyPath {
    fn from(segments: &[S; N]) -> Self {
        KeyPath(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl From<KeyPath> for Vec<String> {
    fn from(path: KeyPath) -> Self {
        path.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        write!(f, "{}", self.0.join("."))
    }
}
