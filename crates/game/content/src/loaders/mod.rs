//! Content loaders for reading scorekeeping data from files.
//!
//! This module provides loaders that convert RON/TOML files into core types.

pub mod catalog;
pub mod rules;
pub mod script;

pub use catalog::{CatalogFile, CatalogLoader, QuickPicks};
pub use rules::RulesLoader;
pub use script::{GameScript, ScriptLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
