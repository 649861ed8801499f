use crate::output::print_text;
use anyhow::{Context, Result};
use fieldlens_core::LineWindow;
use fieldlens_core::inspect::inspect_file;
use log::info;
use std::path::PathBuf;

pub struct LinesCommand {
    pub path: PathBuf,
    pub window: LineWindow,
}

impl LinesCommand {
    pub fn new(path: PathBuf, window: LineWindow) -> Self {
        Self { path, window }
    }
}

impl crate::commands::Command for LinesCommand {
    fn run(&self) -> Result<()> {
        info!(
            "Inspecting {} lines {}..{}",
            self.path.display(),
            self.window.start,
            self.window.end
        );

        let report = inspect_file(&self.path, self.window)
            .with_context(|| format!("Failed to inspect {}", self.path.display()))?;

        print_text(&report.to_string())?;
        Ok(())
    }
}
