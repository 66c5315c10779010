use log::debug;

use crate::parsing::{
    inline::parse_inline,
    text::{SliceError, TextSlice},
};

use super::{
    extent::{block_len, list_item_len, list_len},
    kinds::{BlockQuote, CodeFence, Heading, IndentCode, ListItem, Paragraph, Rule},
    types::{Block, BlockKind, ListMarker},
};

/// One frame of the recursive segmenter: a kind plus the lines it owns, with
/// that kind's prefixes already stripped.
///
/// Frames copy the views they are given, so stripping never reaches back into
/// the parent's lines.
pub struct BlockParser<'a> {
    kind: BlockKind,
    lines: Vec<TextSlice<'a>>,
    /// Indent level of a list item's marker line.
    indent: usize,
    /// Container frames between this one and the root.
    depth: usize,
}

/// Deepest container nesting. Past it, quote and list markers are read as
/// paragraph text so pathological input cannot exhaust the stack.
pub const MAX_DEPTH: usize = 128;

impl<'a> BlockParser<'a> {
    /// Opens a frame of `kind` over `lines`.
    pub fn open(kind: BlockKind, lines: &[TextSlice<'a>]) -> Self {
        let mut lines = lines.to_vec();
        let mut indent = 0;

        match kind {
            BlockKind::Root | BlockKind::List => {}
            BlockKind::Blockquote => {
                for line in &mut lines {
                    *line = BlockQuote::strip(*line);
                }
            }
            BlockKind::UnorderedListItem => {
                if let Some(first) = lines.first_mut() {
                    indent = ListItem::indent_level(*first);
                    *first = ListItem::strip_bullet(*first);
                }
            }
            BlockKind::OrderedListItem { .. } => {
                if let Some(first) = lines.first_mut() {
                    indent = ListItem::indent_level(*first);
                    *first = ListItem::strip_number(*first);
                }
            }
            BlockKind::IndentCode { within_list } => {
                for line in &mut lines {
                    *line = IndentCode::strip(*line, within_list);
                }
            }
            BlockKind::BacktickCode => {
                if let Some(first) = lines.first_mut() {
                    *first = CodeFence::strip_opening(*first);
                }
                if lines.first().is_some_and(|l| l.is_whitespace()) {
                    lines.remove(0);
                }
                if let Some(last) = lines.last_mut() {
                    *last = CodeFence::strip_closing(*last);
                }
                if lines.last().is_some_and(|l| l.is_whitespace()) {
                    lines.pop();
                }
            }
        }

        debug!(
            "opened {:?} frame at byte {} over {} line(s)",
            kind,
            lines.first().map_or(0, |l| l.start()),
            lines.len()
        );

        Self {
            kind,
            lines,
            indent,
            depth: 0,
        }
    }

    /// Finishes the frame.
    ///
    /// The root yields its children directly; every other kind yields the
    /// one block it stands for.
    pub fn into_blocks(self) -> Result<Vec<Block>, SliceError> {
        let block = match self.kind {
            BlockKind::Root => return self.children(),
            BlockKind::Blockquote => Block::Blockquote {
                children: self.children()?,
            },
            BlockKind::List => Block::List {
                children: self.children()?,
            },
            BlockKind::UnorderedListItem => Block::ListItem {
                marker: ListMarker::Unordered,
                indent: self.indent,
                children: self.children()?,
            },
            BlockKind::OrderedListItem { number } => Block::ListItem {
                marker: ListMarker::Ordered { number },
                indent: self.indent,
                children: self.children()?,
            },
            BlockKind::IndentCode { .. } | BlockKind::BacktickCode => Block::Code {
                text: self
                    .lines
                    .iter()
                    .map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            },
        };
        Ok(vec![block])
    }

    fn sub(&self, kind: BlockKind, start: usize, len: usize) -> Result<Vec<Block>, SliceError> {
        let mut child = BlockParser::open(kind, &self.lines[start..start + len]);
        child.depth = self.depth + 1;
        child.into_blocks()
    }

    /// Scans the frame's lines into child blocks.
    fn children(&self) -> Result<Vec<Block>, SliceError> {
        let lines = self.lines.as_slice();
        let within_list = self.kind.is_list_item();
        let can_nest = self.depth < MAX_DEPTH;
        let mut out = Vec::new();
        // Line an ordered item may auto-number at, and the number it gets.
        let mut numbering: Option<(usize, u64)> = None;
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if line.is_whitespace() {
                i += 1;
                continue;
            }

            if let Some((depth, text)) = Heading::parse(line)? {
                out.push(Block::Heading {
                    depth,
                    text: text.to_string(),
                    runs: parse_inline(text)?,
                });
                i += 1;
                continue;
            }

            if Rule::starts_line(line) {
                out.push(Block::Rule);
                i += 1;
                continue;
            }

            if can_nest && self.kind == BlockKind::List {
                if ListItem::is_bullet_line(line) {
                    let len = list_item_len(lines, i, ListItem::indent_level(line));
                    out.extend(self.sub(BlockKind::UnorderedListItem, i, len)?);
                    i += len;
                    continue;
                }

                if let Some(parsed) = ListItem::ordered_number(line) {
                    let number = match numbering {
                        Some((at, next)) if at == i => next,
                        _ => parsed,
                    };
                    let len = list_item_len(lines, i, ListItem::indent_level(line));
                    out.extend(self.sub(BlockKind::OrderedListItem { number }, i, len)?);
                    numbering = (len == 1).then_some((i + 1, number.saturating_add(1)));
                    i += len;
                    continue;
                }
            } else if can_nest && ListItem::is_item_line(line) {
                let len = list_len(lines, i);
                out.extend(self.sub(BlockKind::List, i, len)?);
                i += len;
                continue;
            }

            if can_nest && BlockQuote::starts(line) {
                let len = block_len(lines, i);
                out.extend(self.sub(BlockKind::Blockquote, i, len)?);
                i += len;
                continue;
            }

            if IndentCode::starts(line, within_list) {
                let len = IndentCode::extent(lines, i, within_list);
                out.extend(self.sub(BlockKind::IndentCode { within_list }, i, len)?);
                i += len;
                continue;
            }

            // An unclosed fence falls through to paragraph text.
            if CodeFence::opens(line)
                && let Some(len) = CodeFence::extent(lines, i)
            {
                out.extend(self.sub(BlockKind::BacktickCode, i, len)?);
                i += len;
                continue;
            }

            let len = block_len(lines, i);
            out.push(paragraph(&lines[i..i + len])?);
            i += len;
        }

        Ok(out)
    }
}

/// Lazy continuation: every line trimmed, joined with single spaces.
fn paragraph(lines: &[TextSlice<'_>]) -> Result<Block, SliceError> {
    let text = lines
        .iter()
        .map(|l| l.trim_whitespace().as_str())
        .collect::<Vec<_>>()
        .join(Paragraph::JOIN);
    let runs = parse_inline(TextSlice::new(&text))?;
    Ok(Block::Paragraph { text, runs })
}

/// Segments a document's lines into blocks.
pub fn parse_blocks(lines: &[TextSlice<'_>]) -> Result<Vec<Block>, SliceError> {
    BlockParser::open(BlockKind::Root, lines).into_blocks()
}
