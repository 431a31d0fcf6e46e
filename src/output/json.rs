use serde::Serialize;

use crate::checker::{Issue, ValidationResult};
use crate::error::{DivGuardError, Result};
use crate::report::Report;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    results: Vec<FileResult>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    clean: usize,
    warned: usize,
    errored: usize,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    status: &'static str,
    errors: Vec<IssueEntry>,
    warnings: Vec<IssueEntry>,
}

#[derive(Serialize)]
struct IssueEntry {
    line: Option<usize>,
    message: String,
}

#[derive(Serialize)]
struct ErrorOutput {
    error: ErrorEntry,
}

#[derive(Serialize)]
struct ErrorEntry {
    #[serde(rename = "type")]
    error_type: &'static str,
    message: String,
}

impl JsonFormatter {
    /// Render a run-level failure as `{ "error": { "type", "message" } }`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn format_error(err: &DivGuardError) -> Result<String> {
        let output = ErrorOutput {
            error: ErrorEntry {
                error_type: err.error_type(),
                message: err.to_string(),
            },
        };
        Ok(serde_json::to_string_pretty(&output)? + "\n")
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: report.summary.total,
                clean: report.summary.clean,
                warned: report.summary.warned,
                errored: report.summary.errored,
            },
            results: report.results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)? + "\n")
    }
}

fn convert_result(result: &ValidationResult) -> FileResult {
    FileResult {
        path: result.path.display().to_string(),
        status: result.status().as_str(),
        errors: result.errors.iter().map(convert_issue).collect(),
        warnings: result.warnings.iter().map(convert_issue).collect(),
    }
}

fn convert_issue(issue: &Issue) -> IssueEntry {
    IssueEntry {
        line: issue.line(),
        message: issue.to_string(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
