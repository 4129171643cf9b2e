// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between native Rust types and document nodes.
//!
//! `FromNode` reads a native value out of a node, `IntoNode` builds a node from one.
//! Scalars map onto the matching node kind. Paths are stored as strings. Collections
//! are stored as arrays whose elements are converted one at a time with the
//! element type's own scalar rule.

use crate::ports::DocumentNode;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::Hash;
use std::path::{Path, PathBuf};

/// A native type that can be read from a document node.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "json")]
/// # {
/// use treecfg::domain::FromNode;
/// use serde_json::json;
///
/// assert_eq!(u32::from_node(&json!(42)), Some(42));
/// assert_eq!(u32::from_node(&json!(-1)), None);
/// assert_eq!(Vec::<String>::from_node(&json!(["a", "b"])), Some(vec!["a".to_string(), "b".to_string()]));
/// # }
/// ```
pub trait FromNode: Sized {
    /// Returns true if `node` has the structural kind this type is read from.
    ///
    /// For scalars this also checks range, so a node holding `2^40` is not an `i32`.
    /// Collections only check that the node is an array; elements are validated
    /// by [`FromNode::from_node`].
    fn is_compatible<N: DocumentNode>(node: &N) -> bool {
        Self::from_node(node).is_some()
    }

    /// Converts `node`, or returns `None` if it is not convertible.
    fn from_node<N: DocumentNode>(node: &N) -> Option<Self>;
}

/// A native value that can be written into a document.
pub trait IntoNode {
    /// Builds a node holding this value, or `None` if the value has no lossless
    /// representation (a path that is not valid UTF-8, for instance).
    fn into_node<N: DocumentNode>(self) -> Option<N>;
}

impl FromNode for bool {
    fn from_node<N: DocumentNode>(node: &N) -> Option<Self> {
        node.as_bool()
    }
}

impl IntoNode for bool {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        Some(N::from_bool(self))
    }
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {$(
        impl FromNode for $ty {
            fn from_node<N: DocumentNode>(node: &N) -> Option<Self> {
                node.as_i64().and_then(|v| <$ty>::try_from(v).ok())
            }
        }

        impl IntoNode for $ty {
            fn into_node<N: DocumentNode>(self) -> Option<N> {
                i64::try_from(self).ok().map(N::from_i64)
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {$(
        impl FromNode for $ty {
            fn from_node<N: DocumentNode>(node: &N) -> Option<Self> {
                node.as_u64().and_then(|v| <$ty>::try_from(v).ok())
            }
        }

        impl IntoNode for $ty {
            fn into_node<N: DocumentNode>(self) -> Option<N> {
                u64::try_from(self).ok().map(N::from_u64)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl FromNode for String {
    fn from_node<N: DocumentNode>(node: &N) -> Option<Self> {
        node.as_str().map(str::to_string)
    }
}

impl IntoNode for String {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        Some(N::from_string(self))
    }
}

impl IntoNode for &str {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        Some(N::from_string(self.to_string()))
    }
}

impl IntoNode for &String {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        Some(N::from_string(self.clone()))
    }
}

impl FromNode for PathBuf {
    fn from_node<N: DocumentNode>(node: &N) -> Option<Self> {
        node.as_str().map(PathBuf::from)
    }
}

impl IntoNode for &Path {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        self.to_str().map(|s| N::from_string(s.to_string()))
    }
}

impl IntoNode for &PathBuf {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        self.as_path().into_node()
    }
}

impl IntoNode for PathBuf {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        self.into_os_string()
            .into_string()
            .ok()
            .map(N::from_string)
    }
}

/// Builds an array node from any sequence of convertible values.
///
/// Returns `None` as soon as one element cannot be represented.
pub fn array_from_iter<N, I>(values: I) -> Option<N>
where
    N: DocumentNode,
    I: IntoIterator,
    I::Item: IntoNode,
{
    let mut array = N::new_array();
    for value in values {
        if !array.push_element(value.into_node()?) {
            return None;
        }
    }
    Some(array)
}

/// Converts every element of an array node, preserving order.
fn collect_elements<N, T, C>(node: &N) -> Option<C>
where
    N: DocumentNode,
    T: FromNode,
    C: FromIterator<T>,
{
    node.elements()?.iter().map(T::from_node).collect()
}

impl<T: FromNode> FromNode for Vec<T> {
    fn is_compatible<N: DocumentNode>(node: &N) -> bool {
        node.is_array()
    }

    fn from_node<N: DocumentNode>(node: &N) -> Option<Self> {
        collect_elements::<N, T, Self>(node)
    }
}

impl<T: FromNode> FromNode for VecDeque<T> {
    fn is_compatible<N: DocumentNode>(node: &N) -> bool {
        node.is_array()
    }

    fn from_node<N: DocumentNode>(node: &N) -> Option<Self> {
        collect_elements::<N, T, Self>(node)
    }
}

impl<T: FromNode + Ord> FromNode for BTreeSet<T> {
    fn is_compatible<N: DocumentNode>(node: &N) -> bool {
        node.is_array()
    }

    fn from_node<N: DocumentNode>(node: &N) -> Option<Self> {
        collect_elements::<N, T, Self>(node)
    }
}

impl<T: FromNode + Eq + Hash> FromNode for HashSet<T> {
    fn is_compatible<N: DocumentNode>(node: &N) -> bool {
        node.is_array()
    }

    fn from_node<N: DocumentNode>(node: &N) -> Option<Self> {
        collect_elements::<N, T, Self>(node)
    }
}

impl<T: IntoNode> IntoNode for Vec<T> {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        array_from_iter(self)
    }
}

impl<T: IntoNode> IntoNode for VecDeque<T> {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        array_from_iter(self)
    }
}

impl<T: IntoNode> IntoNode for BTreeSet<T> {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        array_from_iter(self)
    }
}

impl<T: IntoNode> IntoNode for HashSet<T> {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        array_from_iter(self)
    }
}

impl<T: IntoNode + Clone> IntoNode for &[T] {
    fn into_node<N: DocumentNode>(self) -> Option<N> {
        array_from_iter(self.iter().cloned())
    }
}
