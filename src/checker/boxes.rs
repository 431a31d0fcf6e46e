use std::fmt;

use crate::counter::count_tags;

use super::Issue;

/// Closing a box takes longer than this many lines → warning.
pub const DEFAULT_WARN_AFTER: usize = 100;

/// A box still open after this many lines is reported as unclosed.
pub const DEFAULT_UNCLOSED_AFTER: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxKind {
    Callout,
    QuickFacts,
}

impl BoxKind {
    pub const ALL: [Self; 2] = [Self::Callout, Self::QuickFacts];

    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Callout => r#"class="callout""#,
            Self::QuickFacts => r#"class="quick-facts""#,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Callout => "callout",
            Self::QuickFacts => "quick-facts",
        }
    }

    /// Returns the kind of box opened on `line`, if any.
    ///
    /// A line opens a box when it carries one of the full markers. Any line
    /// mentioning `callout` at all is labelled a callout, so
    /// `class="quick-facts"` next to a `callout-content` child counts as one.
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        if !Self::ALL.iter().any(|kind| line.contains(kind.marker())) {
            return None;
        }
        if line.contains(Self::Callout.label()) {
            Some(Self::Callout)
        } else {
            Some(Self::QuickFacts)
        }
    }
}

impl fmt::Display for BoxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Line-based scan for boxes that take suspiciously long to close.
///
/// Every line with a box marker starts its own scan with depth 0, counting
/// open and close markers line by line from that same line. Scans never share
/// state, so nested or overlapping boxes are each reported on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxScanner {
    warn_after: usize,
    unclosed_after: usize,
}

impl Default for BoxScanner {
    fn default() -> Self {
        Self::new(DEFAULT_WARN_AFTER, DEFAULT_UNCLOSED_AFTER)
    }
}

impl BoxScanner {
    #[must_use]
    pub const fn new(warn_after: usize, unclosed_after: usize) -> Self {
        Self {
            warn_after,
            unclosed_after,
        }
    }

    #[must_use]
    pub const fn warn_after(&self) -> usize {
        self.warn_after
    }

    #[must_use]
    pub const fn unclosed_after(&self) -> usize {
        self.unclosed_after
    }

    /// Scan `text` and return warnings ordered by the line each box opens on.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<Issue> {
        let lines: Vec<&str> = text.split('\n').collect();

        lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let kind = BoxKind::detect(line)?;
                self.scan_box(&lines, index, kind)
            })
            .collect()
    }

    fn scan_box(&self, lines: &[&str], start_index: usize, kind: BoxKind) -> Option<Issue> {
        let start_line = start_index + 1;
        let mut depth: i64 = 0;

        // `distance` is how many lines past the opening line we are.
        for (distance, line) in lines[start_index..].iter().enumerate() {
            depth += count_tags(line).diff();

            if depth == 0 && distance > 0 {
                return (distance > self.warn_after).then_some(Issue::SlowClose {
                    line: start_line,
                    kind,
                    lines: distance,
                });
            }

            if distance > self.unclosed_after && depth > 0 {
                return Some(Issue::Unclosed {
                    line: start_line,
                    kind,
                    limit: self.unclosed_after,
                });
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "boxes_tests.rs"]
mod tests;
