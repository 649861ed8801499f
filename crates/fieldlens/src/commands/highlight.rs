use crate::output::print_text;
use anyhow::{Context, Result};
use fieldlens_core::PlaceholderMapping;
use fieldlens_core::config::MappingConfig;
use fieldlens_core::config::consts::highlight::SUCCESS_MESSAGE;
use fieldlens_core::highlight::{highlight_content, highlight_text, is_idempotent};
use fieldlens_core::text::read_text;
use log::{debug, info, warn};
use std::path::PathBuf;

pub struct HighlightCommand {
    pub path: PathBuf,
    pub mapping: Option<PathBuf>,
    pub dry_run: bool,
}

impl HighlightCommand {
    pub fn new(path: PathBuf, mapping: Option<PathBuf>, dry_run: bool) -> Self {
        Self {
            path,
            mapping,
            dry_run,
        }
    }

    fn load_mapping(&self) -> Result<PlaceholderMapping> {
        let Some(mapping_path) = &self.mapping else {
            return Ok(PlaceholderMapping::builtin());
        };

        info!("Loading mapping from {}", mapping_path.display());
        let mapping = MappingConfig::from_file(mapping_path)
            .and_then(MappingConfig::into_mapping)
            .with_context(|| format!("Failed to load mapping {}", mapping_path.display()))?;
        Ok(mapping)
    }
}

impl crate::commands::Command for HighlightCommand {
    fn run(&self) -> Result<()> {
        let mapping = self.load_mapping()?;
        let content = read_text(&self.path)
            .with_context(|| format!("Failed to read template {}", self.path.display()))?;

        // Only user mappings are checked.
        if self.mapping.is_some() && !is_idempotent(&content, &mapping) {
            warn!(
                "Mapping is not idempotent on {}: highlighting again will change it further",
                self.path.display()
            );
        }

        if self.dry_run {
            let (_, report) = highlight_text(&content, &mapping);
            debug!("{report}");
            print_text(&format!(
                "Dry run: {} field occurrence(s) would be highlighted",
                report.total_wrapped()
            ))?;
            return Ok(());
        }

        let report = highlight_content(&self.path, &content, &mapping)
            .with_context(|| format!("Failed to highlight fields in {}", self.path.display()))?;
        debug!("{report}");

        print_text(SUCCESS_MESSAGE)?;
        Ok(())
    }
}
