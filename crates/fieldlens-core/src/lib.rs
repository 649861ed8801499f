// Core modules
pub mod config;
pub mod error;
pub mod highlight;
pub mod inspect;
pub mod text;

// Re-export commonly used types
pub use error::{FieldlensError, Result};
pub use highlight::{HighlightReport, PlaceholderMapping, Replacement, Wrapper};
pub use inspect::{LineReport, LineWindow};
