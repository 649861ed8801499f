//! CLI command structure using clap

use clap::{Parser, Subcommand};
use fieldlens_core::config::consts::{highlight, lines};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldlens")]
#[command(version, about = "Template debugging utilities", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a window of a file's lines with invisible characters escaped
    Lines(LinesArgs),

    /// Wrap template placeholders in highlight markup, in place
    Highlight(HighlightArgs),
}

#[derive(Parser)]
pub struct LinesArgs {
    /// File to inspect
    #[arg(default_value = lines::DEFAULT_PATH)]
    pub path: PathBuf,

    /// First line index, zero-based and inclusive
    #[arg(long, default_value_t = lines::DEFAULT_START)]
    pub start: usize,

    /// Last line index, zero-based and exclusive
    #[arg(long, default_value_t = lines::DEFAULT_END)]
    pub end: usize,
}

#[derive(Parser)]
pub struct HighlightArgs {
    /// Template file to rewrite
    #[arg(default_value = highlight::DEFAULT_PATH)]
    pub path: PathBuf,

    /// TOML mapping file replacing the built-in field list
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Report what would be highlighted without writing
    #[arg(long)]
    pub dry_run: bool,
}
