//! Test utilities for fieldlens
//!
//! This crate provides shared testing utilities used across the fieldlens workspace.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod fixtures;

pub use fixtures::{write_fixture, write_numbered_lines};

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// This keeps test files in a single gitignored location that is easy to
/// clean up manually if needed.
///
/// # Returns
///
/// A `TempDir` instance that automatically cleans up on drop.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use fieldlens_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = tmp_base()?;
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

fn tmp_base() -> std::io::Result<PathBuf> {
    Ok(std::env::current_dir()?.join(".tmp"))
}

/// Whether `path` lives under the `.tmp/` base of the current directory
pub fn is_in_workspace_tmp(path: &Path) -> bool {
    tmp_base().is_ok_and(|base| path.starts_with(base))
}
