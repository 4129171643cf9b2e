// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document engine adapter.
//!
//! This module binds the config reader to `serde_json`. The crate enables
//! `serde_json`'s `preserve_order` feature, so objects keep their members in
//! insertion order and a document written back to disk keeps the layout it was
//! read with.

use crate::domain::{ConfigError, NodeKind, Result};
use crate::ports::{DocumentEngine, DocumentNode};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

impl DocumentNode for Value {
    fn new_object() -> Self {
        Value::Object(Map::new())
    }

    fn new_array() -> Self {
        Value::Array(Vec::new())
    }

    fn from_bool(value: bool) -> Self {
        Value::Bool(value)
    }

    fn from_i64(value: i64) -> Self {
        Value::from(value)
    }

    fn from_u64(value: u64) -> Self {
        Value::from(value)
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
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn member_mut(&mut self, key: &str) -> Option<&mut Self> {
        match self {
            Value::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    fn add_member(&mut self, key: &str, value: Self) -> Option<&mut Self> {
        match self {
            Value::Object(map) => Some(map.entry(key.to_string()).or_insert(value)),
            _ => None,
        }
    }

    fn push_element(&mut self, value: Self) -> bool {
        match self {
            Value::Array(elements) => {
                elements.push(value);
                true
            }
            _ => false,
        }
    }

    fn elements(&self) -> Option<&[Self]> {
        match self {
            Value::Array(elements) => Some(elements.as_slice()),
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

/// JSON engine implementation.
///
/// Parses any JSON text and writes documents pretty-printed with a caller-chosen
/// indent width, one member or element per line, followed by a trailing newline.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::JsonEngine;
/// use treecfg::ports::DocumentEngine;
///
/// let engine = JsonEngine::new();
/// let document = engine.parse(b"{\"a\": [1, 2]}").unwrap();
/// let text = engine.serialize(&document, 4).unwrap();
/// assert_eq!(
///     String::from_utf8(text).unwrap(),
///     "{\n    \"a\": [\n        1,\n        2\n    ]\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonEngine;

impl JsonEngine {
    /// Creates a new JSON engine.
    pub fn new() -> Self {
        JsonEngine
    }
}

impl DocumentEngine for JsonEngine {
    type Node = Value;

    fn name(&self) -> &str {
        "json"
    }

    fn parse(&self, content: &[u8]) -> Result<Value> {
        serde_json::from_slice(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn serialize(&self, document: &Value, indent_width: usize) -> Result<Vec<u8>> {
        let indent = vec![b' '; indent_width];
        let mut buffer = Vec::new();
        {
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            document
                .serialize(&mut serializer)
                .map_err(|e| ConfigError::SerializeError {
                    message: format!("Failed to serialize JSON: {}", e),
                    source: Some(Box::new(e)),
                })?;
        }
        buffer.push(b'\n');
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_engine_parse_object() {
        let engine = JsonEngine::new();
        let document = engine.parse(br#"{"server": {"port": 8080}}"#).unwrap();

        assert!(document.is_object());
        let port = document.member("server").and_then(|s| s.member("port"));
        assert_eq!(port, Some(&json!(8080)));
    }

    #[test]
    fn test_json_engine_parse_invalid() {
        let engine = JsonEngine::new();
        let result = engine.parse(b"this is not json");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_json_engine_parse_empty_input() {
        let engine = JsonEngine::new();
        assert!(engine.parse(b"").is_err());
    }

    #[test]
    fn test_json_engine_empty_document_round_trip() {
        let engine = JsonEngine::new();
        let document = engine.parse(engine.empty_document()).unwrap();

        assert_eq!(document, json!({}));
        assert_eq!(engine.serialize(&document, 4).unwrap(), b"{}\n");
    }

    #[test]
    fn test_json_engine_serialize_indent_width() {
        let engine = JsonEngine::new();
        let document = json!({"a": {"b": true}});

        let two = String::from_utf8(engine.serialize(&document, 2).unwrap()).unwrap();
        assert_eq!(two, "{\n  \"a\": {\n    \"b\": true\n  }\n}\n");

        let zero = String::from_utf8(engine.serialize(&document, 0).unwrap()).unwrap();
        assert_eq!(zero, "{\n\"a\": {\n\"b\": true\n}\n}\n");
    }

    #[test]
    fn test_json_engine_preserves_insertion_order() {
        let engine = JsonEngine::new();
        let mut document = Value::new_object();
        document.add_member("zebra", Value::from_u64(1));
        document.add_member("apple", Value::from_u64(2));

        let text = String::from_utf8(engine.serialize(&document, 1).unwrap()).unwrap();
        assert_eq!(text, "{\n \"zebra\": 1,\n \"apple\": 2\n}\n");
    }

    #[test]
    fn test_json_engine_metadata() {
        let engine = JsonEngine::default();
        assert_eq!(engine.name(), "json");
    }

    #[test]
    fn test_json_node_kinds() {
        assert_eq!(json!(null).kind(), NodeKind::Null);
        assert_eq!(json!(false).kind(), NodeKind::Bool);
        assert_eq!(json!(-3).kind(), NodeKind::SignedInt);
        assert_eq!(json!(3).kind(), NodeKind::UnsignedInt);
        assert_eq!(json!(3.5).kind(), NodeKind::Float);
        assert_eq!(json!("s").kind(), NodeKind::String);
        assert_eq!(json!([]).kind(), NodeKind::Array);
        assert_eq!(json!({}).kind(), NodeKind::Object);
    }

    #[test]
    fn test_json_node_member_operations() {
        let mut node = Value::new_object();
        assert!(!node.has_member("key"));
        assert!(!node.set_member("key", Value::from_bool(true)));

        node.add_member("key", Value::from_bool(true));
        assert!(node.has_member("key"));
        assert!(node.set_member("key", Value::from_bool(false)));
        assert_eq!(node, json!({"key": false}));
    }

    #[test]
    fn test_json_node_member_on_scalar() {
        let mut node = Value::from_i64(5);
        assert!(node.member("key").is_none());
        assert!(node.add_member("key", Value::Null).is_none());
        assert!(!node.push_element(Value::Null));
        assert!(node.elements().is_none());
    }

    #[test]
    fn test_json_node_scalar_accessors() {
        assert_eq!(DocumentNode::as_bool(&json!(true)), Some(true));
        assert_eq!(DocumentNode::as_i64(&json!(-9)), Some(-9));
        assert_eq!(DocumentNode::as_u64(&json!(-9)), None);
        assert_eq!(DocumentNode::as_u64(&json!(u64::MAX)), Some(u64::MAX));
        assert_eq!(DocumentNode::as_str(&json!("x")), Some("x"));
        assert_eq!(DocumentNode::as_str(&json!(1)), None);
    }
}
