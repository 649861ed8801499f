use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldlensError {
    // File errors
    #[error("FILE_ACCESS_ERROR: cannot access '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DECODING_ERROR: '{path}' is not valid UTF-8: {source}")]
    Decoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // Mapping errors
    #[error("EMPTY_MAPPING: placeholder mapping has no replacements")]
    EmptyMapping,

    #[error("INVALID_MAPPING: {0}")]
    InvalidMapping(String),

    // Config errors
    #[error("CONFIG_INVALID: failed to parse mapping file '{path}': {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },
}

impl FieldlensError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FieldlensError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FieldlensError>;
