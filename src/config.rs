//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nodetree/nodetree.toml`
//! 3. Local config: `<dir>/.nodetree.toml`
//! 4. Environment variables: `NODETREE_*` prefix, `__` as section separator
//!    (e.g. `NODETREE_RENDER__INDENT`)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::{Node, DEFAULT_INDENT, DEFAULT_MARKER};

/// How a tree is laid out by [`RenderSettings::render`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Prefix added once per depth level
    pub indent: String,
    /// Text wrapped around each node name
    pub marker: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.into(),
            marker: DEFAULT_MARKER.into(),
        }
    }
}

impl RenderSettings {
    pub fn render<T>(&self, node: &Node<T>) -> String {
        node.render_with(&self.indent, &self.marker)
    }
}

/// Unified configuration for nodetree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name given to the root of trees built from paths
    pub root_name: String,
    /// Rendering layout
    pub render: RenderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_name: "root".into(),
            render: RenderSettings::default(),
        }
    }
}

/// Get the XDG config directory for nodetree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nodetree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nodetree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".nodetree.toml")
}

fn config_err(e: config::ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.nodetree.toml`
    ///
    /// Files that do not exist are skipped; files that exist but do not
    /// parse are an error.
    #[instrument(level = "debug")]
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("root_name", defaults.root_name.clone())
            .map_err(config_err)?
            .set_default("render.indent", defaults.render.indent.clone())
            .map_err(config_err)?
            .set_default("render.marker", defaults.render.marker.clone())
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!(path = %local_path.display(), "loading local config");
                builder = builder.add_source(File::from(local_path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("NODETREE")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }
}
