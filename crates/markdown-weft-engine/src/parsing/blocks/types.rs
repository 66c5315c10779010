use serde::Serialize;

use crate::parsing::inline::InlineRun;

/// The kind of a block frame the segmenter recurses into.
///
/// Leaf blocks (headings, paragraphs, rules) never get a frame of their own:
/// they are recognised and emitted while scanning their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// The whole document.
    Root,
    Blockquote,
    /// A run of list items.
    List,
    UnorderedListItem,
    OrderedListItem {
        /// Number shown for the item, after auto-increment.
        number: u64,
    },
    /// Indented code; list items need a deeper indent.
    IndentCode { within_list: bool },
    BacktickCode,
}

impl BlockKind {
    pub fn is_list_item(self) -> bool {
        matches!(
            self,
            BlockKind::UnorderedListItem | BlockKind::OrderedListItem { .. }
        )
    }
}

/// How a list item is introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListMarker {
    Unordered,
    Ordered { number: u64 },
}

/// A parsed block.
///
/// Container variants own their children; leaves own their text and, for
/// headings and paragraphs, its inline runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Blockquote {
        children: Vec<Block>,
    },
    List {
        children: Vec<Block>,
    },
    ListItem {
        marker: ListMarker,
        /// Indent level of the item line.
        indent: usize,
        children: Vec<Block>,
    },
    /// Indented or fenced code; lines joined with `\n`.
    Code {
        text: String,
    },
    Heading {
        depth: u8,
        text: String,
        runs: Vec<InlineRun>,
    },
    /// Lines trimmed and joined with single spaces.
    Paragraph {
        text: String,
        runs: Vec<InlineRun>,
    },
    Rule,
}

impl Block {
    /// Child blocks, empty for leaves.
    pub fn children(&self) -> &[Block] {
        match self {
            Block::Blockquote { children }
            | Block::List { children }
            | Block::ListItem { children, .. } => children,
            Block::Code { .. }
            | Block::Heading { .. }
            | Block::Paragraph { .. }
            | Block::Rule => &[],
        }
    }

    /// Inline runs, empty for blocks that carry none.
    pub fn runs(&self) -> &[InlineRun] {
        match self {
            Block::Heading { runs, .. } | Block::Paragraph { runs, .. } => runs,
            Block::Blockquote { .. }
            | Block::List { .. }
            | Block::ListItem { .. }
            | Block::Code { .. }
            | Block::Rule => &[],
        }
    }
}
