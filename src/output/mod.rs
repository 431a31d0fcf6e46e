mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::{DivGuardError, Result};
use crate::report::Report;

/// Trait for formatting a report into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Report printed in place of the usual one when there was nothing to validate.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_environment_error(err: &DivGuardError, format: OutputFormat) -> Result<String> {
    match (format, err) {
        (OutputFormat::Json, _) => JsonFormatter::format_error(err),
        (OutputFormat::Text, DivGuardError::DirectoryNotFound { .. }) => Ok(format!(
            "Error: {err}\nRun from the project root directory or pass the directory to scan\n"
        )),
        (OutputFormat::Text, other) => Ok(format!("{other}\n")),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
