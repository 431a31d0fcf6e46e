/// Opening-tag marker. Matches `<div>`, `<div class="...">` and, being a plain
/// substring, anything else that starts with `<div`.
pub const OPEN_MARKER: &str = "<div";

pub const CLOSE_MARKER: &str = "</div>";

/// Raw open/close marker occurrences in a piece of text.
///
/// Counts are naive substring counts: markers inside comments, scripts or text
/// nodes are counted like any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagCounts {
    pub opens: usize,
    pub closes: usize,
}

impl TagCounts {
    #[must_use]
    pub const fn new(opens: usize, closes: usize) -> Self {
        Self { opens, closes }
    }

    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.opens == self.closes
    }

    /// Signed `opens - closes`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // Counts are bounded by file size
    pub const fn diff(&self) -> i64 {
        self.opens as i64 - self.closes as i64
    }
}

#[must_use]
pub fn count_tags(text: &str) -> TagCounts {
    TagCounts {
        opens: text.matches(OPEN_MARKER).count(),
        closes: text.matches(CLOSE_MARKER).count(),
    }
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
