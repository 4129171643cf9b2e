// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document engine trait definitions.
//!
//! This module defines the two traits that bind the config reader to a concrete tree
//! library. `DocumentNode` exposes the primitive node operations the navigation and
//! conversion code is written against. `DocumentEngine` covers the file boundary:
//! turning bytes into a tree and a tree back into bytes.

use crate::domain::{NodeKind, Result};
use std::fmt;

/// Primitive operations on one node of a configuration tree.
///
/// Implementors only need to provide construction, kind inspection, member access
/// and scalar accessors. Everything else has a default built on those.
///
/// Member operations on a node that is not an object behave as if the member was
/// absent (`member` returns `None`, `add_member` returns `None`). Element operations
/// on a node that is not an array behave the same way.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "json")]
/// # {
/// use treecfg::ports::DocumentNode;
/// use treecfg::domain::NodeKind;
///
/// let mut root = serde_json::Value::new_object();
/// root.add_member("port", serde_json::Value::from_u64(8080));
///
/// assert!(root.has_member("port"));
/// assert_eq!(root.member("port").and_then(|n| n.as_u64()), Some(8080));
/// assert_eq!(root.kind(), NodeKind::Object);
/// # }
/// ```
pub trait DocumentNode: Clone + fmt::Debug + Sized {
    /// Creates an empty object node.
    fn new_object() -> Self;

    /// Creates an empty array node.
    fn new_array() -> Self;

    /// Creates a boolean node.
    fn from_bool(value: bool) -> Self;

    /// Creates an integer node from a signed value.
    fn from_i64(value: i64) -> Self;

    /// Creates an integer node from an unsigned value.
    fn from_u64(value: u64) -> Self;

    /// Creates a string node.
    fn from_string(value: String) -> Self;

    /// Returns the structural kind of this node.
    fn kind(&self) -> NodeKind;

    /// Returns the member named `key` if this node is an object holding it.
    fn member(&self, key: &str) -> Option<&Self>;

    /// Mutable variant of [`DocumentNode::member`].
    fn member_mut(&mut self, key: &str) -> Option<&mut Self>;

    /// Appends a new member and returns a reference to it.
    ///
    /// Callers must check that `key` is absent first; engines that keep insertion
    /// order append at the end. Returns `None` if this node is not an object.
    fn add_member(&mut self, key: &str, value: Self) -> Option<&mut Self>;

    /// Appends an element if this node is an array. Returns false otherwise.
    fn push_element(&mut self, value: Self) -> bool;

    /// Returns the elements if this node is an array.
    fn elements(&self) -> Option<&[Self]>;

    /// Returns the value if this node is a boolean.
    fn as_bool(&self) -> Option<bool>;

    /// Returns the value if this node is an integer that fits in an `i64`.
    fn as_i64(&self) -> Option<i64>;

    /// Returns the value if this node is an integer that fits in a `u64`.
    fn as_u64(&self) -> Option<u64>;

    /// Returns the text if this node is a string.
    fn as_str(&self) -> Option<&str>;

    /// Returns true if this node is an object holding `key`.
    fn has_member(&self, key: &str) -> bool {
        self.member(key).is_some()
    }

    /// Overwrites an existing member in place.
    ///
    /// Returns false (and drops `value`) if the member does not exist.
    fn set_member(&mut self, key: &str, value: Self) -> bool {
        match self.member_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Returns true if this node is an object.
    fn is_object(&self) -> bool {
        self.kind() == NodeKind::Object
    }

    /// Returns true if this node is an array.
    fn is_array(&self) -> bool {
        self.kind() == NodeKind::Array
    }
}

/// A tree library that can parse and serialize whole configuration documents.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "json")]
/// # {
/// use treecfg::adapters::JsonEngine;
/// use treecfg::ports::{DocumentEngine, DocumentNode};
///
/// let engine = JsonEngine::new();
/// let document = engine.parse(br#"{"name": "demo"}"#).unwrap();
/// assert_eq!(document.member("name").and_then(|n| n.as_str()), Some("demo"));
///
/// let text = engine.serialize(&document, 2).unwrap();
/// assert_eq!(String::from_utf8(text).unwrap(), "{\n  \"name\": \"demo\"\n}\n");
/// # }
/// ```
pub trait DocumentEngine {
    /// The node type this engine produces.
    type Node: DocumentNode;

    /// Returns the name of this engine, used in logs and error messages.
    fn name(&self) -> &str;

    /// Parses a complete document.
    fn parse(&self, content: &[u8]) -> Result<Self::Node>;

    /// Serializes a complete document, indenting nested levels by `indent_width`
    /// spaces where the format allows it.
    fn serialize(&self, document: &Self::Node, indent_width: usize) -> Result<Vec<u8>>;

    /// Returns the bytes written when bootstrapping a missing file.
    fn empty_document(&self) -> &'static [u8] {
        b"{}\n"
    }
}
