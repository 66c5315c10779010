//! # Parsing
//!
//! Markdown text to a [`Document`] of nested [`Block`]s.
//!
//! Lines are split once ([`text::split_lines`]), segmented recursively
//! ([`blocks::parse_blocks`]) and each heading or paragraph is inline parsed
//! ([`inline::parse_inline`]) as it is emitted.

pub mod blocks;
pub mod inline;
pub mod text;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::images::ImageId;

pub use blocks::{Block, ListMarker};
pub use inline::{ImageRef, InlineRun, RunContent, TextStyle};
pub use text::{SliceError, TextSlice};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("slice arithmetic failed: {0}")]
    Slice(#[from] SliceError),
}

/// A parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Every image reference in document order, numbered from zero.
    ///
    /// The numbering matches the ids a sink receives while the document is
    /// walked.
    pub fn images(&self) -> Vec<(ImageId, &ImageRef)> {
        fn collect<'d>(blocks: &'d [Block], out: &mut Vec<&'d ImageRef>) {
            for block in blocks {
                out.extend(block.runs().iter().filter_map(InlineRun::image));
                collect(block.children(), out);
            }
        }

        let mut refs = Vec::new();
        collect(&self.blocks, &mut refs);
        refs.into_iter()
            .enumerate()
            .map(|(i, image)| (ImageId(i), image))
            .collect()
    }
}

/// Parses a whole document.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let lines = text::split_lines(source);
    let blocks = blocks::parse_blocks(&lines)?;
    log::debug!(
        "parsed {} line(s) into {} top-level block(s)",
        lines.len(),
        blocks.len()
    );
    Ok(Document { blocks })
}
