//! Field highlighting - literal placeholder wrapping
//!
//! Each replacement of a [`PlaceholderMapping`] is applied in order to the
//! result of the previous ones (sequential, not simultaneous, substitution).
//! Matching is literal and global. An occurrence already sitting inside a
//! copy of its replacement is left alone, which makes wrapper mappings
//! idempotent: a second run finds nothing bare to wrap.

pub mod mapping;


pub use mapping::{ApplyCount, PlaceholderMapping, Replacement, Wrapper, placeholder};

use crate::error::Result;
use crate::text::{read_text, write_text};
use log::{debug, info};
use std::fmt;
use std::path::Path;

/// Per-pattern counts of one highlighting pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCount {
    pub pattern: String,
    pub wrapped: usize,
    pub already_wrapped: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightReport {
    counts: Vec<PatternCount>,
}

impl HighlightReport {
    pub fn counts(&self) -> &[PatternCount] {
        &self.counts
    }

    pub fn get(&self, pattern: &str) -> Option<&PatternCount> {
        self.counts.iter().find(|c| c.pattern == pattern)
    }

    pub fn total_wrapped(&self) -> usize {
        self.counts.iter().map(|c| c.wrapped).sum()
    }

    pub fn total_already_wrapped(&self) -> usize {
        self.counts.iter().map(|c| c.already_wrapped).sum()
    }

    /// Whether any occurrence was wrapped
    pub fn changed(&self) -> bool {
        self.total_wrapped() > 0
    }
}

impl fmt::Display for HighlightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.counts.iter().filter(|c| c.wrapped + c.already_wrapped > 0) {
            writeln!(
                f,
                "{}: {} wrapped, {} already wrapped",
                c.pattern, c.wrapped, c.already_wrapped
            )?;
        }
        write!(
            f,
            "{} wrapped, {} already wrapped",
            self.total_wrapped(),
            self.total_already_wrapped()
        )
    }
}

/// Apply `mapping` to `text`, returning the new text and what was done.
pub fn highlight_text(text: &str, mapping: &PlaceholderMapping) -> (String, HighlightReport) {
    let mut content = text.to_string();
    let mut report = HighlightReport::default();

    for replacement in mapping.replacements() {
        let (next, count) = replacement.apply(&content);
        debug!(
            "{}: {} wrapped, {} already wrapped",
            replacement.pattern(),
            count.wrapped,
            count.already_wrapped
        );
        report.counts.push(PatternCount {
            pattern: replacement.pattern().to_string(),
            wrapped: count.wrapped,
            already_wrapped: count.already_wrapped,
        });
        content = next;
    }

    (content, report)
}

/// Whether applying `mapping` twice to `text` gives the same result as once.
pub fn is_idempotent(text: &str, mapping: &PlaceholderMapping) -> bool {
    let (once, _) = highlight_text(text, mapping);
    let (twice, _) = highlight_text(&once, mapping);
    once == twice
}

/// Highlight already-read `content` and write the result to `path`.
///
/// The file is always rewritten (truncated), even when nothing was wrapped.
pub fn highlight_content(
    path: impl AsRef<Path>,
    content: &str,
    mapping: &PlaceholderMapping,
) -> Result<HighlightReport> {
    let path = path.as_ref();
    let (highlighted, report) = highlight_text(content, mapping);
    write_text(path, &highlighted)?;

    if report.changed() {
        info!(
            "Highlighted {} field occurrence(s) in {}",
            report.total_wrapped(),
            path.display()
        );
    } else {
        info!("No bare fields in {}, content unchanged", path.display());
    }

    Ok(report)
}

/// Highlight the file at `path` in place.
pub fn highlight_file(
    path: impl AsRef<Path>,
    mapping: &PlaceholderMapping,
) -> Result<HighlightReport> {
    let path = path.as_ref();
    let content = read_text(path)?;
    highlight_content(path, &content, mapping)
}
