// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration reader.
//!
//! This module provides `ConfigReader`, which owns one configuration document and
//! the path of its backing file. It exposes typed accessors keyed by a path of
//! nested object keys, and moves the whole document to and from storage on
//! [`ConfigReader::read`] and [`ConfigReader::write`].

use crate::adapters::FileStorage;
use crate::domain::config_type::array_from_iter;
use crate::domain::{ConfigError, FromNode, IntoNode, KeyPath, Result};
use crate::ports::{DocumentEngine, DocumentNode, Storage};
use crate::service::navigation;
use directories::ProjectDirs;
use std::any::type_name;
use std::path::{Path, PathBuf};

/// A configuration document bound to one backing file.
///
/// The reader is generic over the tree library (`E`) and the storage used for the
/// backing file (`S`). Until [`ConfigReader::read`] succeeds, the document is an
/// empty object.
///
/// # Accessors
///
/// For every supported type `T` the reader provides the same set of operations:
///
/// - [`has`](ConfigReader::has): the path exists and holds a node compatible with `T`
/// - [`get`](ConfigReader::get): the converted value, or an error
/// - [`get_or_default`](ConfigReader::get_or_default): the converted value, or the fallback
/// - [`set`](ConfigReader::set): write a value; all intermediate objects must exist
/// - [`set_deep`](ConfigReader::set_deep): write a value, creating missing intermediate objects
///
/// Paths accept anything that converts into a [`KeyPath`]: a single key, an array or
/// slice of keys, or a `Vec` of keys.
///
/// # Examples
///
/// ```rust,no_run
/// use treecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut config = JsonConfigReader::new("settings.json");
/// config.read()?;
///
/// let port = config.get_or_default(8080_u16, ["server", "port"]);
/// config.set_deep(port, ["server", "port"])?;
/// config.set_deep(vec!["info", "warn"], ["logging", "levels"])?;
///
/// config.write(4)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigReader<E: DocumentEngine, S: Storage = FileStorage> {
    /// Path of the backing file
    config_file_path: PathBuf,
    /// The in-memory document
    document: E::Node,
    /// Tree library used at the file boundary
    engine: E,
    /// Storage holding the backing file
    storage: S,
}

/// A reader over a JSON file on disk.
#[cfg(feature = "json")]
pub type JsonConfigReader = ConfigReader<crate::adapters::JsonEngine>;

/// A reader over a YAML file on disk.
///
/// YAML output always uses a two-space indent; the width passed to
/// [`ConfigReader::write`] is ignored.
#[cfg(feature = "yaml")]
pub type YamlConfigReader = ConfigReader<crate::adapters::YamlEngine>;

impl<E, S> ConfigReader<E, S>
where
    E: DocumentEngine + Default,
    S: Storage + Default,
{
    /// Creates a reader for the file at `config_file_path`.
    ///
    /// Nothing is read until [`ConfigReader::read`] is called.
    pub fn new(config_file_path: impl Into<PathBuf>) -> Self {
        Self::with_parts(config_file_path, E::default(), S::default())
    }

    /// Creates a reader for `filename` in the OS-appropriate configuration directory.
    ///
    /// This method uses the `directories` crate to determine the configuration
    /// directory for the current operating system.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    /// * `filename` - The configuration file name (e.g., "settings.json")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use treecfg::service::JsonConfigReader;
    ///
    /// let mut config = JsonConfigReader::from_default_location("myapp", "com.example", "settings.json").unwrap();
    /// config.read().unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::StorageError {
                location: app_name.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::new(proj_dirs.config_dir().join(filename)))
    }
}

impl<E: DocumentEngine, S: Storage> ConfigReader<E, S> {
    /// Creates a reader from explicit engine and storage instances.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treecfg::adapters::{JsonEngine, MemoryStorage};
    /// use treecfg::service::ConfigReader;
    ///
    /// let storage = MemoryStorage::new().with_file("app.json", r#"{"debug": true}"#);
    /// let mut config = ConfigReader::with_parts("app.json", JsonEngine::new(), storage);
    /// config.read().unwrap();
    /// assert!(config.get::<bool>("debug").unwrap());
    /// ```
    pub fn with_parts(config_file_path: impl Into<PathBuf>, engine: E, storage: S) -> Self {
        Self {
            config_file_path: config_file_path.into(),
            document: E::Node::new_object(),
            engine,
            storage,
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.config_file_path
    }

    /// Returns the in-memory document.
    pub fn document(&self) -> &E::Node {
        &self.document
    }

    /// Returns the document engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the document from the backing file.
    ///
    /// If the file does not exist it is first created holding an empty object, and
    /// loading continues from the fresh file. On failure the previous in-memory
    /// document is kept.
    ///
    /// # Errors
    ///
    /// * `StorageError` - the file could not be created or read
    /// * `ParseError` - the content is malformed, or its root is not an object
    pub fn read(&mut self) -> Result<()> {
        let path = self.config_file_path.as_path();

        if !self.storage.exists(path) {
            tracing::info!(
                "Configuration file '{}' not found, creating an empty {} document",
                path.display(),
                self.engine.name()
            );
            self.storage.write_all(path, self.engine.empty_document())?;
        }

        let content = self.storage.read_all(path)?;
        let document = self.engine.parse(&content).inspect_err(|e| {
            tracing::warn!("Failed to parse '{}': {}", path.display(), e);
        })?;

        if !document.is_object() {
            tracing::warn!(
                "Configuration file '{}' has a {} at its root",
                path.display(),
                document.kind()
            );
            return Err(ConfigError::ParseError {
                message: format!(
                    "Document root must be an object, found {}",
                    document.kind()
                ),
                source: None,
            });
        }

        tracing::debug!(
            "Read configuration from '{}' ({} bytes) via {} storage",
            path.display(),
            content.len(),
            self.storage.name()
        );
        self.document = document;
        Ok(())
    }

    /// Writes the whole document to the backing file, replacing its content.
    ///
    /// Nested levels are indented by `indent_width` spaces where the engine's format
    /// allows it.
    pub fn write(&self, indent_width: usize) -> Result<()> {
        let content = self.engine.serialize(&self.document, indent_width)?;
        self.storage.write_all(&self.config_file_path, &content)?;

        tracing::debug!(
            "Wrote configuration to '{}' ({} bytes)",
            self.config_file_path.display(),
            content.len()
        );
        Ok(())
    }

    /// Returns true if every segment of `path` resolves to a member.
    pub fn contains_key(&self, path: impl Into<KeyPath>) -> bool {
        navigation::contains_key(&self.document, &path.into())
    }

    /// Returns the node at `path`.
    ///
    /// # Errors
    ///
    /// * `EmptyPath` - the path has no segments
    /// * `MissingKey` - a segment is absent
    /// * `WrongNodeKind` - an intermediate segment is not an object
    pub fn value_ref(&self, path: impl Into<KeyPath>) -> Result<&E::Node> {
        navigation::value_ref(&self.document, &path.into())
    }

    /// Writes a raw node at `path`. All intermediate objects must already exist.
    pub fn set_value(&mut self, value: E::Node, path: impl Into<KeyPath>) -> Result<()> {
        navigation::set_value(&mut self.document, value, &path.into())
    }

    /// Writes a raw node at `path`, creating missing intermediate objects.
    pub fn set_deep_value(&mut self, value: E::Node, path: impl Into<KeyPath>) -> Result<()> {
        navigation::set_deep_value(&mut self.document, value, &path.into())
    }

    /// Returns true if `path` exists and holds a node `T` can be read from.
    ///
    /// Collections only require an array; their elements are checked by `get`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treecfg::adapters::{JsonEngine, MemoryStorage};
    /// use treecfg::service::ConfigReader;
    ///
    /// let storage = MemoryStorage::new().with_file("a.json", r#"{"port": 70000}"#);
    /// let mut config = ConfigReader::with_parts("a.json", JsonEngine::new(), storage);
    /// config.read().unwrap();
    ///
    /// assert!(config.has::<u32>("port"));
    /// assert!(!config.has::<u16>("port"));
    /// assert!(!config.has::<String>("port"));
    /// ```
    pub fn has<T: FromNode>(&self, path: impl Into<KeyPath>) -> bool {
        let path = path.into();
        match navigation::value_ref(&self.document, &path) {
            Ok(node) => T::is_compatible(node),
            Err(e) if e.is_lookup_failure() => false,
            Err(e) => {
                tracing::warn!("Unexpected error checking {}: {}", path, e);
                false
            }
        }
    }

    /// Returns the value at `path` converted to `T`.
    ///
    /// # Errors
    ///
    /// * `EmptyPath` - the path has no segments
    /// * `MissingKey` - a segment is absent
    /// * `WrongNodeKind` - the node (or one of its elements) is not convertible to `T`
    pub fn get<T: FromNode>(&self, path: impl Into<KeyPath>) -> Result<T> {
        let path = path.into();
        let node = navigation::value_ref(&self.document, &path)?;
        T::from_node(node)
            .ok_or_else(|| ConfigError::wrong_node_kind(&path, type_name::<T>(), node.kind()))
    }

    /// Returns the value at `path` converted to `T`, or `default` if there is no
    /// usable value there. Never fails.
    ///
    /// Lookup failures (see [`ConfigError::is_lookup_failure`]) fall back quietly;
    /// anything else also falls back but is logged as a warning.
    pub fn get_or_default<T: FromNode>(&self, default: T, path: impl Into<KeyPath>) -> T {
        let path = path.into();
        match self.get(&path) {
            Ok(value) => value,
            Err(e) if e.is_lookup_failure() => {
                tracing::debug!("Using default for {}: {}", path, e);
                default
            }
            Err(e) => {
                tracing::warn!("Using default for {} after unexpected error: {}", path, e);
                default
            }
        }
    }

    /// Writes `value` at `path`. All intermediate objects must already exist.
    ///
    /// # Errors
    ///
    /// * `InvalidPathSegment` - an intermediate object is missing
    /// * `WrongNodeKind` - an intermediate node is not an object
    /// * `UnrepresentableValue` - the value cannot be stored losslessly
    pub fn set<V: IntoNode>(&mut self, value: V, path: impl Into<KeyPath>) -> Result<()> {
        let path = path.into();
        let node = Self::to_node(value, &path)?;
        navigation::set_value(&mut self.document, node, &path)
    }

    /// Writes `value` at `path`, creating missing intermediate objects.
    ///
    /// # Errors
    ///
    /// * `WrongNodeKind` - an existing intermediate node is not an object
    /// * `UnrepresentableValue` - the value cannot be stored losslessly
    pub fn set_deep<V: IntoNode>(&mut self, value: V, path: impl Into<KeyPath>) -> Result<()> {
        let path = path.into();
        let node = Self::to_node(value, &path)?;
        navigation::set_deep_value(&mut self.document, node, &path)
    }

    /// Writes the elements of `values` as an array at `path`. All intermediate
    /// objects must already exist.
    pub fn set_array<I>(&mut self, values: I, path: impl Into<KeyPath>) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        let path = path.into();
        let node = Self::to_array::<I>(values, &path)?;
        navigation::set_value(&mut self.document, node, &path)
    }

    /// Writes the elements of `values` as an array at `path`, creating missing
    /// intermediate objects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treecfg::adapters::{JsonEngine, MemoryStorage};
    /// use treecfg::service::ConfigReader;
    ///
    /// let mut config = ConfigReader::with_parts("a.json", JsonEngine::new(), MemoryStorage::new());
    /// config.set_deep_array((1..=3).map(|n| n * 10), ["limits", "steps"]).unwrap();
    /// assert_eq!(config.get::<Vec<u32>>(["limits", "steps"]).unwrap(), vec![10, 20, 30]);
    /// ```
    pub fn set_deep_array<I>(&mut self, values: I, path: impl Into<KeyPath>) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        let path = path.into();
        let node = Self::to_array::<I>(values, &path)?;
        navigation::set_deep_value(&mut self.document, node, &path)
    }

    fn to_node<V: IntoNode>(value: V, path: &KeyPath) -> Result<E::Node> {
        value
            .into_node()
            .ok_or_else(|| ConfigError::UnrepresentableValue {
                path: path.to_string(),
                type_name: type_name::<V>().to_string(),
            })
    }

    fn to_array<I>(values: I, path: &KeyPath) -> Result<E::Node>
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        array_from_iter(values).ok_or_else(|| ConfigError::UnrepresentableValue {
            path: path.to_string(),
            type_name: type_name::<I::Item>().to_string(),
        })
    }
}
