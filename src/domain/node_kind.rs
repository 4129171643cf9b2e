// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural kind of a document node.

use std::fmt;

/// The structural kind of a node in a configuration document.
///
/// Every document engine maps its own value representation onto these kinds.
/// Integers are split by sign so that unsigned values never have to travel
/// through a signed representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The null value
    Null,
    /// A boolean
    Bool,
    /// A negative integer, or any integer the engine only holds as signed
    SignedInt,
    /// A non-negative integer
    UnsignedInt,
    /// A floating point number
    Float,
    /// A string
    String,
    /// An ordered sequence of nodes
    Array,
    /// A mapping from string keys to nodes
    Object,
    /// Anything else the engine can represent (e.g. tagged YAML values)
    Other,
}

impl NodeKind {
    /// Returns the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::SignedInt => "signed integer",
            NodeKind::UnsignedInt => "unsigned integer",
            NodeKind::Float => "float",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
            NodeKind::Other => "other",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(NodeKind::Object.to_string(), "object");
        assert_eq!(NodeKind::UnsignedInt.to_string(), "unsigned integer");
    }
}
