use std::io::Write;

use crate::checker::{FileStatus, Issue, ValidationResult};
use crate::error::Result;
use crate::report::{Report, Summary};

use super::OutputFormatter;

const SEPARATOR_WIDTH: usize = 60;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(status: FileStatus) -> &'static str {
        match status {
            FileStatus::Clean => "✓",
            FileStatus::Warned => "⚠️ ",
            FileStatus::Errored => "❌",
        }
    }

    const fn status_color(status: FileStatus) -> &'static str {
        match status {
            FileStatus::Clean => ansi::GREEN,
            FileStatus::Warned => ansi::YELLOW,
            FileStatus::Errored => ansi::RED,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &ValidationResult, output: &mut Vec<u8>) {
        let status = result.status();
        // Errored files list their errors only; warnings are secondary.
        let issues: &[Issue] = match status {
            FileStatus::Errored => &result.errors,
            FileStatus::Warned => &result.warnings,
            FileStatus::Clean => return,
        };

        let icon = self.colorize(Self::status_icon(status), Self::status_color(status));
        writeln!(output, "{icon} {}", result.file_name()).ok();

        for issue in issues {
            writeln!(output, "  {issue}").ok();
        }
        writeln!(output).ok();
    }

    fn format_summary(&self, summary: &Summary, output: &mut Vec<u8>) {
        writeln!(output, "{}", "=".repeat(SEPARATOR_WIDTH)).ok();
        let clean_icon = self.colorize("✓", ansi::GREEN);
        let warned_icon = self.colorize("⚠", ansi::YELLOW);
        let errored_icon = self.colorize("✗", ansi::RED);
        writeln!(output, "{clean_icon} Clean: {}", summary.clean).ok();
        writeln!(output, "{warned_icon} Warnings: {}", summary.warned).ok();
        writeln!(output, "{errored_icon} Errors: {}", summary.errored).ok();

        if summary.has_errors() {
            writeln!(output, "\nFiles with ERRORS (must fix):").ok();
            for name in &summary.files_with_errors {
                writeln!(output, "  - {name}").ok();
            }
            return;
        }

        if summary.has_warnings() {
            writeln!(output, "\nFiles with WARNINGS (review recommended):").ok();
            for name in &summary.files_with_warnings {
                writeln!(output, "  - {name}").ok();
            }
        }

        writeln!(
            output,
            "\n{}",
            self.colorize("✓ All files have balanced divs!", ansi::GREEN)
        )
        .ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = Vec::new();

        writeln!(
            output,
            "Validating {} documents in '{}'...\n",
            report.results.len(),
            report.root.display()
        )
        .ok();

        for result in &report.results {
            self.format_result(result, &mut output);
        }

        self.format_summary(&report.summary, &mut output);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
