// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-path navigation over a document tree.
//!
//! These functions are written once against [`DocumentNode`] and walk an object one
//! key at a time. Each recursion consumes one segment; when a single segment is
//! left, the operation is applied directly to the current object's member.
//!
//! Navigation never passes through arrays: every non-terminal segment must resolve
//! to an object.

use crate::domain::{ConfigError, KeyPath, Result};
use crate::ports::DocumentNode;

/// Returns true if every segment of `path` resolves, starting at `object`.
///
/// Pure query; never fails. An empty path is never contained.
pub fn contains_key<N: DocumentNode>(object: &N, path: &KeyPath) -> bool {
    contains_key_recursive(object, path.segments())
}

fn contains_key_recursive<N: DocumentNode>(object: &N, keys: &[String]) -> bool {
    let Some((current, rest)) = keys.split_first() else {
        return false;
    };

    match object.member(current) {
        None => false,
        Some(_) if rest.is_empty() => true,
        Some(child) => contains_key_recursive(child, rest),
    }
}

/// Returns the node at `path`.
///
/// Fails with `MissingKey` if a segment is absent and with `WrongNodeKind` if a
/// non-terminal segment resolves to something other than an object.
pub fn value_ref<'a, N: DocumentNode>(object: &'a N, path: &KeyPath) -> Result<&'a N> {
    if path.is_empty() {
        return Err(ConfigError::EmptyPath);
    }
    value_ref_recursive(object, path, 0)
}

fn value_ref_recursive<'a, N: DocumentNode>(
    object: &'a N,
    path: &KeyPath,
    depth: usize,
) -> Result<&'a N> {
    ensure_object(object, path, depth)?;

    let key = &path.segments()[depth];
    let child = object
        .member(key)
        .ok_or_else(|| ConfigError::missing_key(path, key))?;

    if depth + 1 == path.len() {
        Ok(child)
    } else {
        value_ref_recursive(child, path, depth + 1)
    }
}

/// Writes `value` at `path`, requiring every intermediate object to exist.
///
/// Fails with `InvalidPathSegment` on the first missing intermediate and leaves the
/// document untouched.
pub fn set_value<N: DocumentNode>(object: &mut N, value: N, path: &KeyPath) -> Result<()> {
    if path.is_empty() {
        return Err(ConfigError::EmptyPath);
    }
    set_value_recursive(object, value, path, 0)
}

fn set_value_recursive<N: DocumentNode>(
    object: &mut N,
    value: N,
    path: &KeyPath,
    depth: usize,
) -> Result<()> {
    ensure_object(object, path, depth)?;

    let key = &path.segments()[depth];
    if depth + 1 == path.len() {
        assign_member(object, key, value);
        return Ok(());
    }

    let child = object
        .member_mut(key)
        .ok_or_else(|| ConfigError::invalid_path_segment(path, key))?;
    set_value_recursive(child, value, path, depth + 1)
}

/// Writes `value` at `path`, creating missing intermediate objects on the way down.
///
/// An existing intermediate that is not an object fails with `WrongNodeKind`. Such
/// nodes can only be met before the first object is created, so a failed call never
/// leaves partial structure behind.
pub fn set_deep_value<N: DocumentNode>(object: &mut N, value: N, path: &KeyPath) -> Result<()> {
    if path.is_empty() {
        return Err(ConfigError::EmptyPath);
    }
    set_deep_value_recursive(object, value, path, 0)
}

fn set_deep_value_recursive<N: DocumentNode>(
    object: &mut N,
    value: N,
    path: &KeyPath,
    depth: usize,
) -> Result<()> {
    ensure_object(object, path, depth)?;

    let key = &path.segments()[depth];
    if depth + 1 == path.len() {
        assign_member(object, key, value);
        return Ok(());
    }

    if !object.has_member(key) {
        tracing::trace!("Creating intermediate object '{}' in {}", key, path);
        object.add_member(key, N::new_object());
    }

    let child = object
        .member_mut(key)
        .ok_or_else(|| ConfigError::invalid_path_segment(path, key))?;
    set_deep_value_recursive(child, value, path, depth + 1)
}

/// Overwrites an existing member in place, or appends a new one.
fn assign_member<N: DocumentNode>(object: &mut N, key: &str, value: N) {
    if object.has_member(key) {
        object.set_member(key, value);
    } else {
        object.add_member(key, value);
    }
}

fn ensure_object<N: DocumentNode>(node: &N, path: &KeyPath, depth: usize) -> Result<()> {
    if node.is_object() {
        Ok(())
    } else {
        Err(ConfigError::wrong_node_kind(
            &path.prefix(depth),
            "object",
            node.kind(),
        ))
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::domain::NodeKind;
    use serde_json::{json, Value};

    fn path<const N: usize>(segments: [&str; N]) -> KeyPath {
        KeyPath::from(segments)
    }

    #[test]
    fn test_contains_key_nested() {
        let document = json!({"a": {"b": {"c": 1}}});

        assert!(contains_key(&document, &path(["a"])));
        assert!(contains_key(&document, &path(["a", "b", "c"])));
        assert!(!contains_key(&document, &path(["a", "x"])));
        assert!(!contains_key(&document, &path(["a", "b", "c", "d"])));
    }

    #[test]
    fn test_contains_key_through_array_or_scalar() {
        let document = json!({"list": [{"x": 1}], "n": 5});

        assert!(!contains_key(&document, &path(["list", "0"])));
        assert!(!contains_key(&document, &path(["n", "x"])));
    }

    #[test]
    fn test_contains_key_empty_path() {
        let document = json!({"a": 1});
        assert!(!contains_key(&document, &KeyPath::default()));
    }

    #[test]
    fn test_value_ref_found() {
        let document = json!({"server": {"port": 8080}});
        let node = value_ref(&document, &path(["server", "port"])).unwrap();

        assert_eq!(node, &json!(8080));
    }

    #[test]
    fn test_value_ref_missing() {
        let document = json!({"server": {}});
        let result = value_ref(&document, &path(["server", "port"]));

        match result {
            Err(ConfigError::MissingKey { path, segment }) => {
                assert_eq!(path, "server.port");
                assert_eq!(segment, "port");
            }
            other => panic!("expected MissingKey, got {:?}", other),
        }
    }

    #[test]
    fn test_value_ref_through_scalar() {
        let document = json!({"server": "localhost"});
        let result = value_ref(&document, &path(["server", "port"]));

        match result {
            Err(ConfigError::WrongNodeKind { path, found, .. }) => {
                assert_eq!(path, "server");
                assert_eq!(found, NodeKind::String);
            }
            other => panic!("expected WrongNodeKind, got {:?}", other),
        }
    }

    #[test]
    fn test_value_ref_empty_path() {
        let document = json!({});
        assert!(matches!(
            value_ref(&document, &KeyPath::default()),
            Err(ConfigError::EmptyPath)
        ));
    }

    #[test]
    fn test_set_value_top_level() {
        let mut document = json!({});
        set_value(&mut document, json!(true), &path(["debug"])).unwrap();

        assert_eq!(document, json!({"debug": true}));
    }

    #[test]
    fn test_set_value_requires_intermediate() {
        let mut document = json!({});
        let result = set_value(&mut document, json!(1), &path(["a", "b"]));

        assert!(matches!(result, Err(ConfigError::InvalidPathSegment { .. })));
        assert_eq!(document, json!({}));
    }

    #[test]
    fn test_set_value_existing_intermediate() {
        let mut document = json!({"a": {}});
        set_value(&mut document, json!(1), &path(["a", "b"])).unwrap();

        assert_eq!(document, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_set_value_through_scalar_fails() {
        let mut document = json!({"a": 3});
        let result = set_value(&mut document, json!(1), &path(["a", "b"]));

        assert!(matches!(result, Err(ConfigError::WrongNodeKind { .. })));
        assert_eq!(document, json!({"a": 3}));
    }

    #[test]
    fn test_set_deep_value_creates_intermediates() {
        let mut document = json!({});
        set_deep_value(&mut document, json!("x"), &path(["a", "b", "c"])).unwrap();

        assert_eq!(document, json!({"a": {"b": {"c": "x"}}}));
    }

    #[test]
    fn test_set_deep_value_reuses_existing_objects() {
        let mut document = json!({"a": {"keep": 1}});
        set_deep_value(&mut document, json!(2), &path(["a", "new"])).unwrap();

        assert_eq!(document, json!({"a": {"keep": 1, "new": 2}}));
    }

    #[test]
    fn test_set_deep_value_through_scalar_fails() {
        let mut document = json!({"a": {"b": [1, 2]}});
        let result = set_deep_value(&mut document, json!(1), &path(["a", "b", "c", "d"]));

        match result {
            Err(ConfigError::WrongNodeKind { path, found, .. }) => {
                assert_eq!(path, "a.b");
                assert_eq!(found, NodeKind::Array);
            }
            other => panic!("expected WrongNodeKind, got {:?}", other),
        }
        assert_eq!(document, json!({"a": {"b": [1, 2]}}));
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut document = json!({"first": 1, "second": 2, "third": 3});
        set_deep_value(&mut document, json!(20), &path(["second"])).unwrap();

        let keys: Vec<&String> = document.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["first", "second", "third"]);
        assert_eq!(document["second"], json!(20));
    }

    #[test]
    fn test_set_replaces_subtree() {
        let mut document = json!({"a": {"b": {"c": 1}}});
        set_value(&mut document, json!([1]), &path(["a", "b"])).unwrap();

        assert_eq!(document, json!({"a": {"b": [1]}}));
    }

    #[test]
    fn test_set_on_non_object_root() {
        let mut document = Value::new_array();
        let result = set_deep_value(&mut document, json!(1), &path(["a"]));

        match result {
            Err(ConfigError::WrongNodeKind { path, .. }) => assert_eq!(path, "<root>"),
            other => panic!("expected WrongNodeKind, got {:?}", other),
        }
    }
}
