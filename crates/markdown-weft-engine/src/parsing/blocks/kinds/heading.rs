use crate::parsing::text::{SliceError, TextSlice, WHITESPACE, charset::is_whitespace};

/// ATX headings: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: &'static str = "#";
    pub const MAX_DEPTH: usize = 6;

    /// Reads a heading line as `(depth, text)`.
    ///
    /// The `#` run must be followed by whitespace or the end of the line, so
    /// `#tag` and seven or more `#` stay paragraph text.
    pub fn parse(line: TextSlice<'_>) -> Result<Option<(u8, TextSlice<'_>)>, SliceError> {
        let line = line.trim_front_any(WHITESPACE);
        let depth = line.count_sequence(Self::MARKER, 0);
        if depth == 0 || depth > Self::MAX_DEPTH {
            return Ok(None);
        }
        if line.byte_at(depth).is_some_and(|b| !is_whitespace(b)) {
            return Ok(None);
        }
        let text = line.trim_front(depth)?.trim_whitespace();
        // `depth` is at most MAX_DEPTH.
        Ok(Some((depth as u8, text)))
    }
}
