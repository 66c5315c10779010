pub mod charset;
pub mod lines;
pub mod slice;

pub use charset::{DIGITS, WHITESPACE};
pub use lines::split_lines;
pub use slice::{SliceError, TextSlice};
