use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DivGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("'{}' directory not found", dir.display())]
    DirectoryNotFound { dir: PathBuf },

    #[error("No {} files found in '{}' directory", extension.to_uppercase(), dir.display())]
    NoDocuments { dir: PathBuf, extension: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DivGuardError {
    /// Environment failures are part of the report (missing directory, nothing to scan).
    /// Everything else is a configuration or runtime failure.
    #[must_use]
    pub const fn is_environment(&self) -> bool {
        matches!(self, Self::DirectoryNotFound { .. } | Self::NoDocuments { .. })
    }

    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::DirectoryNotFound { .. } => "DirectoryNotFound",
            Self::NoDocuments { .. } => "NoDocuments",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, DivGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
