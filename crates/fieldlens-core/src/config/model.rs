use crate::config::consts::highlight::{WRAPPER_PREFIX, WRAPPER_SUFFIX};
use crate::error::{FieldlensError, Result};
use crate::highlight::{PlaceholderMapping, Replacement, Wrapper};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mapping file schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MappingConfig {
    /// Field names wrapped as `{{field}}`
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub wrapper: Option<WrapperConfig>,
    /// Explicit literal pairs, applied after `fields`
    #[serde(default)]
    pub replacements: Vec<ReplacementConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrapperConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementConfig {
    pub pattern: String,
    pub replacement: String,
}

fn default_prefix() -> String {
    WRAPPER_PREFIX.to_string()
}

fn default_suffix() -> String {
    WRAPPER_SUFFIX.to_string()
}

impl MappingConfig {
    /// Load a mapping file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = crate::text::read_text(path)?;

        toml::from_str(&content).map_err(|e| FieldlensError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn wrapper(&self) -> Wrapper {
        match &self.wrapper {
            Some(w) => Wrapper::new(w.prefix.clone(), w.suffix.clone()),
            None => Wrapper::default(),
        }
    }

    /// Build the validated mapping: fields first, then explicit pairs.
    pub fn into_mapping(self) -> Result<PlaceholderMapping> {
        let wrapper = self.wrapper();
        let mut replacements: Vec<Replacement> = self
            .fields
            .iter()
            .map(|field| Replacement::field(field, &wrapper))
            .collect();
        replacements.extend(
            self.replacements
                .into_iter()
                .map(|r| Replacement::new(r.pattern, r.replacement)),
        );

        PlaceholderMapping::new(replacements)
    }
}
