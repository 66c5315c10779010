use crate::parsing::text::{TextSlice, WHITESPACE};

/// Backtick fenced code.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    const TICK: &'static [u8] = b"`";

    /// True if the line, ignoring leading whitespace, starts with a fence.
    pub fn opens(line: TextSlice<'_>) -> bool {
        line.trim_front_any(WHITESPACE).starts_with(Self::BACKTICKS)
    }

    /// True if the line, ignoring trailing whitespace, ends with a fence.
    pub fn closes(line: TextSlice<'_>) -> bool {
        line.trim_end_any(WHITESPACE).ends_with(Self::BACKTICKS)
    }

    /// Number of lines from `start` through the closing fence, or `None` when
    /// no later line closes it.
    pub fn extent(lines: &[TextSlice<'_>], start: usize) -> Option<usize> {
        lines
            .iter()
            .enumerate()
            .skip(start + 1)
            .find(|(_, line)| Self::closes(**line))
            .map(|(close, _)| close - start + 1)
    }

    /// Removes the backtick run opening the line, keeping whatever follows.
    pub fn strip_opening(line: TextSlice<'_>) -> TextSlice<'_> {
        line.trim_front_any(WHITESPACE).trim_front_any(Self::TICK)
    }

    /// Removes the backtick run closing the line, keeping whatever precedes.
    pub fn strip_closing(line: TextSlice<'_>) -> TextSlice<'_> {
        line.trim_whitespace().trim_end_any(Self::TICK)
    }
}
