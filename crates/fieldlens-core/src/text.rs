//! UTF-8 text file access
//!
//! Both utilities read the whole file into memory. Decoding is strict:
//! invalid UTF-8 is an error, never replaced.

use crate::error::{FieldlensError, Result};
use log::debug;
use std::path::Path;

/// Read `path` and decode it as UTF-8.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| FieldlensError::file_access(path, e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|e| FieldlensError::Decoding {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Overwrite `path` with `content`, truncating whatever was there.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, content).map_err(|e| FieldlensError::file_access(path, e))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
