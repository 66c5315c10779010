//! How many lines a block spans.
//!
//! All functions work on one frame's already-stripped lines; indices are
//! relative to that frame.

use crate::parsing::text::TextSlice;

use super::kinds::{CodeFence, ListItem, Paragraph, Rule};

/// Whether `lines[i]` cannot continue the block running through `lines[i - 1]`.
///
/// That is the case after a forced break (two trailing spaces), or when the
/// line is blank, opens a list item, is a rule, or opens a code fence.
pub fn is_new_block(lines: &[TextSlice<'_>], i: usize) -> bool {
    if i > 0 && lines[i - 1].ends_with(Paragraph::FORCED_BREAK) {
        return true;
    }
    let line = lines[i];
    line.is_whitespace()
        || ListItem::is_item_line(line)
        || Rule::matches(line)
        || CodeFence::opens(line)
}

/// Number of lines from `start` up to the next block boundary.
///
/// Always at least one.
pub fn block_len(lines: &[TextSlice<'_>], start: usize) -> usize {
    (start + 1..lines.len())
        .find(|&i| is_new_block(lines, i))
        .unwrap_or(lines.len())
        - start
}

/// Number of lines in the list item starting at `start`.
///
/// An item ends at its first boundary, unless that boundary is a blank line
/// followed by a line indented deeper than `indent`, in which case the item
/// carries on with another paragraph.
pub fn list_item_len(lines: &[TextSlice<'_>], start: usize, indent: usize) -> usize {
    let mut end = start;
    loop {
        end += block_len(lines, end);
        let continues = end + 1 < lines.len()
            && lines[end].is_whitespace()
            && ListItem::indent_level(lines[end + 1]) > indent;
        if !continues {
            return end - start;
        }
    }
}

/// Number of lines in the run of list items starting at `start`.
pub fn list_len(lines: &[TextSlice<'_>], start: usize) -> usize {
    let mut end = start;
    while end < lines.len() && ListItem::is_item_line(lines[end]) {
        end += list_item_len(lines, end, ListItem::indent_level(lines[end]));
    }
    end - start
}
