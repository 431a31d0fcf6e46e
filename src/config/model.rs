use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checker::{DEFAULT_UNCLOSED_AFTER, DEFAULT_WARN_AFTER};

/// Name of the config file looked up in the working directory.
pub const LOCAL_CONFIG_NAME: &str = ".div-guard.toml";

pub const DEFAULT_DIR: &str = "blog";
pub const DEFAULT_EXTENSION: &str = "html";

/// Root configuration. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub boxes: BoxConfig,
}

/// Which documents get checked [scan].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory scanned for documents (non-recursive).
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Extension of documents to check, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Glob patterns for paths to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl ScanConfig {
    /// Accept `.html` as well as `html`.
    pub fn normalize_extension(&mut self) {
        if let Some(stripped) = self.extension.strip_prefix('.') {
            self.extension = stripped.to_string();
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            extension: default_extension(),
            exclude: Vec::new(),
        }
    }
}

/// Box closure thresholds [boxes].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BoxConfig {
    /// Closing a box in more lines than this is suspicious.
    #[serde(default = "default_warn_after")]
    pub warn_after: usize,

    /// A box still open after this many lines is reported unclosed.
    #[serde(default = "default_unclosed_after")]
    pub unclosed_after: usize,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            warn_after: DEFAULT_WARN_AFTER,
            unclosed_after: DEFAULT_UNCLOSED_AFTER,
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

const fn default_warn_after() -> usize {
    DEFAULT_WARN_AFTER
}

const fn default_unclosed_after() -> usize {
    DEFAULT_UNCLOSED_AFTER
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
