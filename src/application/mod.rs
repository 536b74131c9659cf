//! Application layer: settings, inputs and error context around the domain
//!
//! This layer feeds the domain tree from files and configuration.

pub mod error;
pub mod error_ext;
pub mod input;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use input::{load_tree, read_paths};
