use crate::parsing::text::TextSlice;

/// Indented code blocks.
pub struct IndentCode;

impl IndentCode {
    /// One level of indent opens code.
    pub const PREFIXES: [&'static str; 2] = ["    ", "\t"];
    /// Inside a list item the item's own indent comes first, so two levels.
    pub const WITHIN_LIST_PREFIXES: [&'static str; 2] = ["        ", "\t\t"];

    pub fn prefixes(within_list: bool) -> &'static [&'static str] {
        if within_list {
            &Self::WITHIN_LIST_PREFIXES
        } else {
            &Self::PREFIXES
        }
    }

    pub fn starts(line: TextSlice<'_>, within_list: bool) -> bool {
        line.starts_with_any(Self::prefixes(within_list))
    }

    /// Number of consecutive indented lines from `start`.
    pub fn extent(lines: &[TextSlice<'_>], start: usize, within_list: bool) -> usize {
        lines[start..]
            .iter()
            .take_while(|line| Self::starts(**line, within_list))
            .count()
    }

    /// Removes the first matching prefix, once.
    pub fn strip(line: TextSlice<'_>, within_list: bool) -> TextSlice<'_> {
        Self::prefixes(within_list)
            .iter()
            .find(|p| line.starts_with(p))
            .map_or(line, |p| line.trim_front_literal(p))
    }
}
