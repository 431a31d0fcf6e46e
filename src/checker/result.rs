use std::fmt;
use std::path::{Path, PathBuf};

use crate::counter::TagCounts;

use super::BoxKind;

/// A single finding on a document.
///
/// `Display` renders the message exactly as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// Open and close marker counts differ.
    Imbalance(TagCounts),
    /// A box closed, but took more lines than allowed.
    SlowClose {
        line: usize,
        kind: BoxKind,
        lines: usize,
    },
    /// A box was still open after `limit` lines; scanning for it stopped.
    Unclosed {
        line: usize,
        kind: BoxKind,
        limit: usize,
    },
    /// The document could not be read or decoded.
    Unreadable { reason: String },
}

impl Issue {
    /// Line the issue is anchored to, for issues tied to a box.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::SlowClose { line, .. } | Self::Unclosed { line, .. } => Some(*line),
            Self::Imbalance(_) | Self::Unreadable { .. } => None,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imbalance(counts) => write!(
                f,
                "Div imbalance: {} opens, {} closes (diff: {})",
                counts.opens,
                counts.closes,
                counts.diff()
            ),
            Self::SlowClose { line, kind, lines } => write!(
                f,
                "Line {line}: {kind} section took {lines} lines to close (suspicious)"
            ),
            Self::Unclosed { line, kind, limit } => write!(
                f,
                "Line {line}: {kind} section still unclosed after {limit}+ lines!"
            ),
            Self::Unreadable { reason } => write!(f, "Could not read file: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    Clean,
    Warned,
    Errored,
}

impl FileStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Warned => "warned",
            Self::Errored => "errored",
        }
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub path: PathBuf,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl ValidationResult {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Result for a document that could not be read at all.
    #[must_use]
    pub fn unreadable(path: &Path, reason: impl fmt::Display) -> Self {
        let mut result = Self::new(path);
        result.errors.push(Issue::Unreadable {
            reason: reason.to_string(),
        });
        result
    }

    /// Errors take precedence: a document with errors is never `Warned`.
    #[must_use]
    pub fn status(&self) -> FileStatus {
        if !self.errors.is_empty() {
            FileStatus::Errored
        } else if !self.warnings.is_empty() {
            FileStatus::Warned
        } else {
            FileStatus::Clean
        }
    }

    /// File name used in the report, falling back to the full path.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
