//! # Block Parsing
//!
//! Recursive segmentation of lines into nested blocks.
//!
//! ## How it works
//!
//! A [`BlockParser`] frame owns a contiguous run of lines and a [`BlockKind`].
//! Opening a frame strips that kind's prefixes (`>`, bullets, code indent,
//! fences) from its own copy of the line views. Scanning the stripped lines
//! then decides how many of them form each child block and opens a child
//! frame over exactly those lines.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind` for frames, the `Block` AST, `ListMarker`
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`extent`**: Where a block ends (`block_len`, `list_item_len`, `list_len`)
//! - **`builder`**: `BlockParser` frames and `parse_blocks`
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in blockquotes in lists, etc.)
//! - Code blocks are raw zones: no block or inline parsing inside
//! - Every line sequence parses; unmatched syntax degrades to paragraphs

pub mod builder;
pub mod extent;
pub mod kinds;
pub mod types;

pub use builder::{BlockParser, parse_blocks};
pub use types::{Block, BlockKind, ListMarker};
