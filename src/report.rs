use std::path::{Path, PathBuf};

use crate::checker::{FileStatus, ValidationResult};
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

/// Per-status counts plus the names of files that need attention, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub clean: usize,
    pub warned: usize,
    pub errored: usize,
    pub files_with_errors: Vec<String>,
    pub files_with_warnings: Vec<String>,
}

impl Summary {
    /// Classify every result into exactly one of errored, warned or clean.
    #[must_use]
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            match result.status() {
                FileStatus::Errored => {
                    summary.errored += 1;
                    summary.files_with_errors.push(result.file_name());
                }
                FileStatus::Warned => {
                    summary.warned += 1;
                    summary.files_with_warnings.push(result.file_name());
                }
                FileStatus::Clean => summary.clean += 1,
            }
        }

        summary
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.errored > 0
    }

    #[must_use]
    pub const fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Errors always fail the run. Warnings only do in strict mode.
    #[must_use]
    pub const fn exit_code(&self, strict: bool) -> i32 {
        if self.has_errors() || (strict && self.has_warnings()) {
            EXIT_FAILURE
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Everything a formatter needs: the scanned directory, results in scan order,
/// and their summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub root: PathBuf,
    pub results: Vec<ValidationResult>,
    pub summary: Summary,
}

impl Report {
    #[must_use]
    pub fn new(root: &Path, results: Vec<ValidationResult>) -> Self {
        let summary = Summary::from_results(&results);
        Self {
            root: root.to_path_buf(),
            results,
            summary,
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
