// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the configuration reader over YAML files.

#![cfg(feature = "yaml")]

mod common;

use common::temp_config_path;
use std::fs;
use treecfg::domain::ConfigError;
use treecfg::service::YamlConfigReader;

#[test]
fn test_yaml_missing_file_bootstrap() {
    let (_dir, path) = temp_config_path("config.yaml");

    let mut config = YamlConfigReader::new(&path);
    config.read().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    assert!(!config.contains_key("anything"));
}

#[test]
fn test_yaml_typed_access() {
    let (_dir, path) = temp_config_path("config.yaml");
    fs::write(
        &path,
        "server:\n  host: localhost\n  port: 5432\n  tags:\n    - a\n    - b\n",
    )
    .unwrap();

    let mut config = YamlConfigReader::new(&path);
    config.read().unwrap();

    assert_eq!(config.get::<String>(["server", "host"]).unwrap(), "localhost");
    assert_eq!(config.get::<u16>(["server", "port"]).unwrap(), 5432);
    assert_eq!(
        config.get::<Vec<String>>(["server", "tags"]).unwrap(),
        vec!["a", "b"]
    );
    assert!(!config.has::<bool>(["server", "host"]));
}

#[test]
fn test_yaml_round_trip() {
    let (_dir, path) = temp_config_path("config.yaml");

    let mut writer = YamlConfigReader::new(&path);
    writer.read().unwrap();
    writer.set_deep(true, ["feature", "enabled"]).unwrap();
    writer.set_deep(u64::MAX, ["feature", "limit"]).unwrap();
    writer.write(2).unwrap();

    let mut reader = YamlConfigReader::new(&path);
    reader.read().unwrap();

    assert!(reader.get::<bool>(["feature", "enabled"]).unwrap());
    assert_eq!(reader.get::<u64>(["feature", "limit"]).unwrap(), u64::MAX);
}

#[test]
fn test_yaml_scalar_root_rejected() {
    let (_dir, path) = temp_config_path("config.yaml");
    fs::write(&path, "just a string\n").unwrap();

    let mut config = YamlConfigReader::new(&path);
    assert!(matches!(config.read(), Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_yaml_write_ignores_indent_width() {
    let (_dir, path) = temp_config_path("config.yaml");

    let mut config = YamlConfigReader::new(&path);
    config.read().unwrap();
    config.set_deep(1_u8, ["a", "b"]).unwrap();
    config.write(8).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a:\n  b: 1\n");
}
