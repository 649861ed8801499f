pub mod consts;
pub mod model;

pub use model::{MappingConfig, ReplacementConfig, WrapperConfig};
