//! Reading tree paths from files and building trees from them.

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Node, TreeBuilder};

/// Reads one path per line, skipping blank lines and `#` comments.
#[instrument(level = "debug")]
pub fn read_paths(file: &Path) -> ApplicationResult<Vec<String>> {
    let content = std::fs::read_to_string(file).with_path_context("read paths", file)?;
    let paths: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    debug!(count = paths.len(), "read paths");
    Ok(paths)
}

/// Builds a tree from command-line paths plus, optionally, a paths file.
pub fn load_tree(builder: &TreeBuilder, paths: &[String], file: Option<&Path>) -> ApplicationResult<Node> {
    let mut all = paths.to_vec();
    if let Some(file) = file {
        all.extend(read_paths(file)?);
    }
    Ok(builder.build_from_paths(&all)?)
}
