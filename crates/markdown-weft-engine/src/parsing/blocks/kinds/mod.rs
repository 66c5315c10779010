//! # Block Kinds
//!
//! Block-specific marker types that own their delimiters. The segmenter asks
//! these whether a line opens, continues or closes a block; it never matches
//! syntax itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indent_code;
pub mod list_item;
pub mod paragraph;
pub mod rule;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use indent_code::IndentCode;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use rule::Rule;
