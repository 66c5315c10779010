use crate::parsing::text::{TextSlice, WHITESPACE};

/// Horizontal rule.
pub struct Rule;

impl Rule {
    pub const SEQUENCE: &'static str = "---";

    /// Whether a line ends the block above it: three dashes once leading
    /// whitespace is dropped, whatever follows them.
    pub fn matches(line: TextSlice<'_>) -> bool {
        Self::starts_line(line.trim_front_any(WHITESPACE))
    }

    /// Whether a line is itself a rule. No indent is allowed, so `    ---`
    /// stays indented code.
    pub fn starts_line(line: TextSlice<'_>) -> bool {
        line.starts_with(Self::SEQUENCE)
    }
}
