mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{DivGuardError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted by name.
    ///
    /// # Errors
    /// Returns `DirectoryNotFound` if `root` is not a directory.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Lists the files directly inside a directory. Subdirectories are not
/// descended into. Dot-files are listed like any other file.
///
/// Symlinks are listed without being resolved, so a dangling link reaches the
/// checker and is reported as unreadable there.
pub struct DocumentScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DocumentScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping directory entry");
                    continue;
                }
            };
            let file_type = entry.file_type();
            let is_document = file_type.is_file()
                || (file_type.is_symlink() && !entry.path().is_dir());
            if !is_document {
                continue;
            }
            let path = entry.into_path();
            if self.filter.should_include(&path) {
                files.push(path);
            }
        }

        files
    }
}

impl<F: FileFilter> FileScanner for DocumentScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(DivGuardError::DirectoryNotFound {
                dir: root.to_path_buf(),
            });
        }
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
