//! Configuration semantic validation.
//!
//! Runs after parsing and after CLI overrides are applied.

use globset::Glob;

use crate::config::Config;
use crate::error::{DivGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the extension is empty, `warn_after >= unclosed_after`,
/// or an exclude pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scan_section(config)?;
    validate_boxes_section(config)?;
    Ok(())
}

fn validate_scan_section(config: &Config) -> Result<()> {
    if config.scan.extension.trim().is_empty() {
        return Err(DivGuardError::Config(
            "scan.extension cannot be empty".to_string(),
        ));
    }

    for pattern in &config.scan.exclude {
        Glob::new(pattern).map_err(|source| DivGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    Ok(())
}

fn validate_boxes_section(config: &Config) -> Result<()> {
    // A slow-close warning can only fire below the unclosed limit.
    if config.boxes.warn_after >= config.boxes.unclosed_after {
        return Err(DivGuardError::Config(format!(
            "boxes.warn_after ({}) must be less than boxes.unclosed_after ({})",
            config.boxes.warn_after, config.boxes.unclosed_after
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
