mod tags;

pub use tags::{CLOSE_MARKER, OPEN_MARKER, TagCounts, count_tags};
