use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "div-guard")]
#[command(author, version, about = "Check HTML documents for div imbalance and long-closing boxes")]
#[command(long_about = "Scans a directory of HTML documents, reports files whose <div> and </div> \
    counts differ, and warns about callout/quick-facts boxes that take suspiciously long to close.\n\n\
    Exit codes:\n  \
    0 - No errors (warnings allowed unless --strict)\n  \
    1 - Div imbalance found, directory missing, or no documents\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Directory to scan (default: scan.dir from config, or "blog")
    pub dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Extension of documents to check (default: html)
    #[arg(long)]
    pub ext: Option<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Warn when a box takes more than this many lines to close
    #[arg(long)]
    pub warn_after: Option<usize>,

    /// Report a box as unclosed after this many lines
    #[arg(long)]
    pub unclosed_after: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
