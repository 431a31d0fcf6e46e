mod boxes;
mod result;

pub use boxes::{BoxKind, BoxScanner, DEFAULT_UNCLOSED_AFTER, DEFAULT_WARN_AFTER};
pub use result::{FileStatus, Issue, ValidationResult};

use crate::config::BoxConfig;
use crate::counter::count_tags;
use crate::document::Document;

pub trait Checker {
    /// Validate a single document.
    ///
    /// Never fails: every finding is recorded on the returned result.
    fn check(&self, document: &Document) -> ValidationResult;
}

/// Checks overall div balance and box closure distance.
///
/// The balance check and the box scan are independent: a document with an
/// imbalance still gets its boxes scanned.
#[derive(Debug, Clone, Default)]
pub struct DivChecker {
    boxes: BoxScanner,
}

impl DivChecker {
    #[must_use]
    pub const fn new(boxes: BoxScanner) -> Self {
        Self { boxes }
    }

    #[must_use]
    pub const fn from_config(config: &BoxConfig) -> Self {
        Self::new(BoxScanner::new(config.warn_after, config.unclosed_after))
    }
}

impl Checker for DivChecker {
    fn check(&self, document: &Document) -> ValidationResult {
        let mut result = ValidationResult::new(document.path());

        let counts = count_tags(document.content());
        if !counts.is_balanced() {
            result.errors.push(Issue::Imbalance(counts));
        }

        result.warnings.extend(self.boxes.scan(document.content()));
        result
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
