//! Fixture files for tests
//!
//! Fixtures are written relative to a test's temporary directory, creating
//! parent directories as needed so tests can mirror the default relative
//! paths (`src/app/fillnda/page.tsx`, `templates/design_mutual_nda_v1`).

use std::path::{Path, PathBuf};

/// Write `contents` to `dir/rel_path` and return the full path
///
/// # Panics
///
/// Panics if the parent directory or the file cannot be created.
pub fn write_fixture(dir: &Path, rel_path: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(rel_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Write a file of `count` lines reading `line 1`, `line 2`, ...
pub fn write_numbered_lines(dir: &Path, rel_path: &str, count: usize) -> PathBuf {
    let body: String = (1..=count).map(|i| format!("line {i}\n")).collect();
    write_fixture(dir, rel_path, body)
}
