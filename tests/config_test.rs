//! Integration tests for Settings config loading from a local file.
//!
//! These tests run without a global config (temp directories only) and
//! without NODETREE_* variables, see config_env_test.rs for those.

#![cfg(feature = "cli")]

use std::fs;

use tempfile::TempDir;

use nodetree::application::ApplicationError;
use nodetree::config::{RenderSettings, Settings};
use nodetree::Node;

#[test]
fn given_no_config_files_when_load_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.root_name, "root");
    assert_eq!(settings.render, RenderSettings::default());
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let local_config = r#"
root_name = "menu"

[render]
indent = "    "
"#;
    fs::write(dir.path().join(".nodetree.toml"), local_config).unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.root_name, "menu");
    assert_eq!(settings.render.indent, "    ");
    assert_eq!(settings.render.marker, "--", "unset keys keep their default");
}

#[test]
fn given_malformed_local_config_when_load_then_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".nodetree.toml"), "render = [not toml").unwrap();

    let result = Settings::load(Some(dir.path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_settings_when_rendering_then_uses_configured_layout() {
    let root: Node = Node::new_root(Some("root"));
    let x = Node::new_child(&root, Some("x")).unwrap();
    Node::new_child(&x, Some("y")).unwrap();
    let settings = RenderSettings {
        indent: "| ".into(),
        marker: String::new(),
    };

    assert_eq!(settings.render(&root), "root\n| x\n| | y\n");
}
