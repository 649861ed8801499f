//! Line inspection - print a window of a file's lines for debugging

pub mod repr;

pub use repr::repr;

use crate::config::consts::lines::{DEFAULT_END, DEFAULT_START};
use crate::error::Result;
use crate::text::read_text;
use log::debug;
use std::fmt;
use std::ops::Range;
use std::path::Path;

/// Split `text` into lines, keeping each `\n` terminator.
///
/// An empty text has no lines and a trailing `\n` does not start a new one.
/// A lone `\r` is not a separator; it stays inside its line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Zero-based `[start, end)` line range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    pub start: usize,
    pub end: usize,
}

impl LineWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The part of the window that exists in a text of `total` lines.
    pub fn clamp(&self, total: usize) -> Range<usize> {
        let end = self.end.min(total);
        let start = self.start.min(end);
        start..end
    }
}

impl Default for LineWindow {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_END)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedLine {
    /// 1-based
    pub number: usize,
    pub repr: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    pub window: LineWindow,
    pub lines: Vec<InspectedLine>,
    pub total: usize,
}

impl fmt::Display for LineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lines {}-{}:", self.window.start.saturating_add(1), self.window.end)?;
        for line in &self.lines {
            writeln!(f, "{}: {}", line.number, line.repr)?;
        }
        write!(f, "\nTotal lines: {}", self.total)
    }
}

pub fn inspect_text(text: &str, window: LineWindow) -> LineReport {
    let all = split_lines(text);
    let range = window.clamp(all.len());
    debug!(
        "Window {}..{} clamped to {:?} of {} lines",
        window.start,
        window.end,
        range,
        all.len()
    );

    let lines = range
        .map(|i| InspectedLine {
            number: i + 1,
            repr: repr(all[i]),
        })
        .collect();

    LineReport {
        window,
        lines,
        total: all.len(),
    }
}

pub fn inspect_file(path: impl AsRef<Path>, window: LineWindow) -> Result<LineReport> {
    let text = read_text(path)?;
    Ok(inspect_text(&text, window))
}
