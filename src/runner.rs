//! Scan a directory, validate every document and aggregate the results.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::checker::{Checker, DivChecker, ValidationResult};
use crate::config::Config;
use crate::document::Document;
use crate::error::{DivGuardError, Result};
use crate::report::Report;
use crate::scanner::{DocumentScanner, FileScanner, GlobFilter};

/// Validate all documents described by `config`.
///
/// Documents are processed one at a time in sorted-name order. A document that
/// cannot be read is recorded as an errored result and the run continues.
///
/// # Errors
/// Returns `DirectoryNotFound` or `NoDocuments` when there is nothing to
/// validate, and `InvalidPattern` or `Io` if the scan itself fails.
pub fn run(config: &Config) -> Result<Report> {
    let dir = config.scan.dir.as_path();

    let filter = GlobFilter::new(config.scan.extension.as_str(), &config.scan.exclude)?;
    let paths = DocumentScanner::new(filter).scan(dir)?;
    if paths.is_empty() {
        return Err(DivGuardError::NoDocuments {
            dir: dir.to_path_buf(),
            extension: config.scan.extension.clone(),
        });
    }
    info!(dir = %dir.display(), documents = paths.len(), "scanning documents");

    let checker = DivChecker::from_config(&config.boxes);
    let results = paths
        .iter()
        .map(|path| validate_path(&checker, path))
        .collect();

    Ok(Report::new(dir, results))
}

/// Load and check a single document.
pub fn validate_path(checker: &impl Checker, path: &Path) -> ValidationResult {
    match Document::load(path) {
        Ok(document) => {
            let result = checker.check(&document);
            debug!(
                path = %path.display(),
                status = result.status().as_str(),
                errors = result.errors.len(),
                warnings = result.warnings.len(),
                "validated document"
            );
            result
        }
        Err(DivGuardError::FileRead { source, .. }) => {
            warn!(path = %path.display(), error = %source, "could not read document");
            ValidationResult::unreadable(path, source)
        }
        Err(other) => {
            warn!(path = %path.display(), error = %other, "could not read document");
            ValidationResult::unreadable(path, other)
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
