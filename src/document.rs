use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DivGuardError, Result};

/// A file path together with its full text. Read once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a document from disk as UTF-8.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be opened or is not valid UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DivGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, content))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
