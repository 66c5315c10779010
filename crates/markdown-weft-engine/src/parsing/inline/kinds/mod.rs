//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: strong tags `**` / `__`, emphasis tags `*` / `_`
//! - **`CodeSpan`**: `TICK = b'\`'`, the run length of which must match to close
//! - **`Link`** / **`Image`**: `[title](url)` brackets and the `!` image prefix
//!
//! The parser calls these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Marker};
pub use link::{Image, Link, LinkMatch};
