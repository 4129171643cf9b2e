// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document engine adapter.
//!
//! This module binds the config reader to `serde_yaml`, so the same typed key-path
//! accessors work over YAML configuration files.

use crate::domain::{ConfigError, NodeKind, Result};
use crate::ports::{DocumentEngine, DocumentNode};
use serde_yaml::{Mapping, Value};

impl DocumentNode for Value {
    fn new_object() -> Self {
        Value::Mapping(Mapping::new())
    }

    fn new_array() -> Self {
        Value::Sequence(Vec::new())
    }

    fn from_bool(value: bool) -> Self {
        Value::Bool(value)
    }

    fn from_i64(value: i64) -> Self {
        Value::Number(value.into())
    }

    fn from_u64(value: u64) -> Self {
        Value::Number(value.into())
    }

    fn from_string(value: String) -> Self {
        Value::String(value)
    }

    fn kind(&self) -> NodeKind {
        match self {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(n) if n.is_u64() => NodeKind::UnsignedInt,
            Value::Number(n) if n.is_i64() => NodeKind::SignedInt,
            Value::Number(_) => NodeKind::Float,
            Value::String(_) => NodeKind::String,
            Value::Sequence(_) => NodeKind::Array,
            Value::Mapping(_) => NodeKind::Object,
            Value::Tagged(_) => NodeKind::Other,
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    fn member_mut(&mut self, key: &str) -> Option<&mut Self> {
        match self {
            Value::Mapping(map) => map.get_mut(key),
            _ => None,
        }
    }

    fn add_member(&mut self, key: &str, value: Self) -> Option<&mut Self> {
        match self {
            Value::Mapping(map) => Some(map.entry(Value::String(key.to_string())).or_insert(value)),
            _ => None,
        }
    }

    fn push_element(&mut self, value: Self) -> bool {
        match self {
            Value::Sequence(elements) => {
                elements.push(value);
                true
            }
            _ => false,
        }
    }

    fn elements(&self) -> Option<&[Self]> {
        match self {
            Value::Sequence(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// YAML engine implementation.
///
/// `serde_yaml` always emits block style with a fixed two-space indent, so the
/// `indent_width` passed to [`DocumentEngine::serialize`] is ignored.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::YamlEngine;
/// use treecfg::ports::{DocumentEngine, DocumentNode};
///
/// let engine = YamlEngine::new();
/// let document = engine.parse(b"database:\n  host: localhost\n").unwrap();
/// let host = document.member("database").and_then(|d| d.member("host"));
/// assert_eq!(host.and_then(|h| h.as_str()), Some("localhost"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlEngine;

/// The indent `serde_yaml` emits for nested levels.
const YAML_INDENT_WIDTH: usize = 2;

impl YamlEngine {
    /// Creates a new YAML engine.
    pub fn new() -> Self {
        YamlEngine
    }
}

impl DocumentEngine for YamlEngine {
    type Node = Value;

    fn name(&self) -> &str {
        "yaml"
    }

    fn parse(&self, content: &[u8]) -> Result<Value> {
        serde_yaml::from_slice(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn serialize(&self, document: &Value, indent_width: usize) -> Result<Vec<u8>> {
        if indent_width != YAML_INDENT_WIDTH {
            tracing::debug!(
                "YAML output uses a fixed indent of {}, ignoring requested width {}",
                YAML_INDENT_WIDTH,
                indent_width
            );
        }
        serde_yaml::to_string(document)
            .map(String::into_bytes)
            .map_err(|e| ConfigError::SerializeError {
                message: format!("Failed to serialize YAML: {}", e),
                source: Some(Box::new(e)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_engine_parse_nested() {
        let engine = YamlEngine::new();
        let yaml = r#"
app:
  database:
    port: 5432
"#;
        let document = engine.parse(yaml.as_bytes()).unwrap();
        let port = document
            .member("app")
            .and_then(|a| a.member("database"))
            .and_then(|d| d.member("port"));

        assert_eq!(port.and_then(DocumentNode::as_u64), Some(5432));
    }

    #[test]
    fn test_yaml_engine_parse_invalid() {
        let engine = YamlEngine::new();
        let result = engine.parse(b"invalid: yaml: content:");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_engine_empty_document() {
        let engine = YamlEngine::new();
        let document = engine.parse(engine.empty_document()).unwrap();

        assert_eq!(document.kind(), NodeKind::Object);
        assert_eq!(engine.serialize(&document, 2).unwrap(), b"{}\n");
    }

    #[test]
    fn test_yaml_engine_serialize_nested() {
        let engine = YamlEngine::new();
        let mut document = Value::new_object();
        let server = document.add_member("server", Value::new_object()).unwrap();
        server.add_member("host", Value::from_string("localhost".to_string()));

        let text = String::from_utf8(engine.serialize(&document, 2).unwrap()).unwrap();
        assert_eq!(text, "server:\n  host: localhost\n");
    }

    #[test]
    fn test_yaml_engine_fixed_indent() {
        let engine = YamlEngine::default();
        let mut document = Value::new_object();
        let a = document.add_member("a", Value::new_object()).unwrap();
        a.add_member("b", Value::from_u64(1));

        for width in [0, 2, 8] {
            let text = String::from_utf8(engine.serialize(&document, width).unwrap()).unwrap();
            assert_eq!(text, "a:
  b: 1
");
        }
        assert_eq!(engine.name(), "yaml");
    }

    #[test]
    fn test_yaml_node_kinds() {
        let engine = YamlEngine::new();
        let document = engine
            .parse(b"a: -1\nb: 1\nc: 1.5\nd: text\ne: [1]\nf: true\ng: null\n")
            .unwrap();

        let kind = |key: &str| document.member(key).map(DocumentNode::kind);
        assert_eq!(kind("a"), Some(NodeKind::SignedInt));
        assert_eq!(kind("b"), Some(NodeKind::UnsignedInt));
        assert_eq!(kind("c"), Some(NodeKind::Float));
        assert_eq!(kind("d"), Some(NodeKind::String));
        assert_eq!(kind("e"), Some(NodeKind::Array));
        assert_eq!(kind("f"), Some(NodeKind::Bool));
        assert_eq!(kind("g"), Some(NodeKind::Null));
    }
}
