use crate::parsing::text::{TextSlice, WHITESPACE};

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not scattered through the
/// segmenter.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix.
    pub const PREFIX: &'static str = ">";

    /// True if the line, ignoring leading whitespace, opens a quote.
    pub fn starts(line: TextSlice<'_>) -> bool {
        line.trim_front_any(WHITESPACE).starts_with(Self::PREFIX)
    }

    /// Strips one level of quoting: leading whitespace, `>`, then at most one
    /// space.
    ///
    /// A line without the prefix is a lazy continuation and comes back
    /// untouched.
    pub fn strip(line: TextSlice<'_>) -> TextSlice<'_> {
        let trimmed = line.trim_front_any(WHITESPACE);
        if !trimmed.starts_with(Self::PREFIX) {
            return line;
        }
        trimmed.trim_front_literal(Self::PREFIX).trim_front_literal(" ")
    }
}
