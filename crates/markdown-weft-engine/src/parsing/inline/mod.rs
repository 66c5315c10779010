//! # Inline Parsing
//!
//! Cursor-based inline parsing over one block's assembled text.
//!
//! ## Architecture
//!
//! Inline parsing runs after block segmentation, once per heading or
//! paragraph. The parser walks a [`cursor::Cursor`] and feeds a
//! [`state::SpanState`], which owns every open style and cuts buffered text
//! into word runs whenever a style changes.
//!
//! ## Modules
//!
//! - **`types`**: `InlineRun`, `RunContent`, `TextStyle`, `ImageRef`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for character-by-character parsing
//! - **`state`**: `SpanState`, the style flags and pending text
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Raw Zones
//!
//! Inline code suppresses everything but its own closing run:
//! `` `**not bold**` `` is one code run, stars included.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod state;
pub mod types;

pub use parser::parse_inline;
pub use types::{ImageRef, InlineRun, RunContent, TextStyle};
