use std::fmt;

use super::charset::{WHITESPACE, is_whitespace};

/// Slice arithmetic that left the bounds of its buffer.
///
/// The block and inline grammars only ever cut at offsets they have just
/// matched, so this is a parser defect rather than a property of the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    #[error("range {start}..{end} is out of bounds for a slice of length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },
    #[error("offset {0} does not fall on a char boundary")]
    NotCharBoundary(usize),
}

/// A zero-copy view `[start, start + len)` into a borrowed text buffer.
///
/// The buffer is either the source document or a scratch string the parser
/// assembled (a paragraph's joined lines). Every operation returns a new
/// view; the buffer itself is never touched. Offsets are bytes; all patterns
/// the grammar matches are ASCII, so trims land on char boundaries.
#[derive(Clone, Copy)]
pub struct TextSlice<'a> {
    source: &'a str,
    start: usize,
    len: usize,
}

impl<'a> TextSlice<'a> {
    /// A view over the whole of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            len: source.len(),
        }
    }

    /// A view over `source[start..start + len]`.
    pub fn from_range(source: &'a str, start: usize, len: usize) -> Result<Self, SliceError> {
        TextSlice::new(source).substring(start, len)
    }

    /// Offset of this view in its buffer.
    pub fn start(self) -> usize {
        self.start
    }

    /// Exclusive end offset in the buffer.
    pub fn end(self) -> usize {
        self.start + self.len
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The viewed text, borrowed from the buffer.
    pub fn as_str(self) -> &'a str {
        &self.source[self.start..self.end()]
    }

    fn bytes(self) -> &'a [u8] {
        self.as_str().as_bytes()
    }

    /// Byte at `index` relative to the start of the view.
    pub fn byte_at(self, index: usize) -> Option<u8> {
        self.bytes().get(index).copied()
    }

    /// Advances past `n` bytes the caller has just matched.
    fn advance(self, n: usize) -> Self {
        debug_assert!(n <= self.len);
        Self {
            source: self.source,
            start: self.start + n,
            len: self.len - n,
        }
    }

    /// Drops the first `n` bytes.
    pub fn trim_front(self, n: usize) -> Result<Self, SliceError> {
        if n > self.len {
            return Err(SliceError::OutOfRange {
                start: n,
                end: n,
                len: self.len,
            });
        }
        if !self.source.is_char_boundary(self.start + n) {
            return Err(SliceError::NotCharBoundary(self.start + n));
        }
        Ok(self.advance(n))
    }

    /// Drops every leading byte contained in `set`.
    pub fn trim_front_any(self, set: &[u8]) -> Self {
        self.advance(self.count_any(set, 0))
    }

    /// Drops `literal` once if the view starts with it.
    pub fn trim_front_literal(self, literal: &str) -> Self {
        if self.starts_with(literal) {
            self.advance(literal.len())
        } else {
            self
        }
    }

    /// Repeatedly drops any of `literals` until none of them prefixes the view.
    pub fn trim_front_literals(self, literals: &[&str]) -> Self {
        let mut out = self;
        loop {
            let Some(hit) = literals
                .iter()
                .find(|l| !l.is_empty() && out.starts_with(l))
            else {
                return out;
            };
            out = out.advance(hit.len());
        }
    }

    /// Drops every trailing byte contained in `set`.
    pub fn trim_end_any(self, set: &[u8]) -> Self {
        let trailing = self
            .bytes()
            .iter()
            .rev()
            .take_while(|b| set.contains(b))
            .count();
        Self {
            len: self.len - trailing,
            ..self
        }
    }

    /// Trims `set` from both ends.
    pub fn trim_any(self, set: &[u8]) -> Self {
        self.trim_front_any(set).trim_end_any(set)
    }

    /// Shorthand for trimming [`WHITESPACE`] from both ends.
    pub fn trim_whitespace(self) -> Self {
        self.trim_any(WHITESPACE)
    }

    /// True for an empty view or one made only of whitespace.
    pub fn is_whitespace(self) -> bool {
        self.bytes().iter().all(|b| is_whitespace(*b))
    }

    /// Length of the run of `b` starting at `index`.
    pub fn count(self, b: u8, index: usize) -> usize {
        self.bytes()
            .get(index..)
            .map_or(0, |rest| rest.iter().take_while(|c| **c == b).count())
    }

    /// Length of the run of bytes from `set` starting at `index`.
    pub fn count_any(self, set: &[u8], index: usize) -> usize {
        self.bytes()
            .get(index..)
            .map_or(0, |rest| rest.iter().take_while(|c| set.contains(c)).count())
    }

    /// Number of back-to-back, non-overlapping copies of `literal` at `index`.
    pub fn count_sequence(self, literal: &str, mut index: usize) -> usize {
        if literal.is_empty() {
            return 0;
        }
        let mut n = 0;
        while self.contains_at(literal, index) {
            n += 1;
            index += literal.len();
        }
        n
    }

    /// True if `literal` occurs exactly at `index`.
    pub fn contains_at(self, literal: &str, index: usize) -> bool {
        self.bytes()
            .get(index..)
            .is_some_and(|rest| rest.starts_with(literal.as_bytes()))
    }

    pub fn starts_with(self, literal: &str) -> bool {
        self.contains_at(literal, 0)
    }

    pub fn ends_with(self, literal: &str) -> bool {
        self.bytes().ends_with(literal.as_bytes())
    }

    pub fn starts_with_any(self, literals: &[&str]) -> bool {
        literals.iter().any(|l| self.starts_with(l))
    }

    /// A sub-view of `len` bytes beginning `offset` bytes into this one.
    pub fn substring(self, offset: usize, len: usize) -> Result<Self, SliceError> {
        let end = offset
            .checked_add(len)
            .filter(|end| *end <= self.len)
            .ok_or(SliceError::OutOfRange {
                start: offset,
                end: offset.saturating_add(len),
                len: self.len,
            })?;
        for at in [self.start + offset, self.start + end] {
            if !self.source.is_char_boundary(at) {
                return Err(SliceError::NotCharBoundary(at));
            }
        }
        Ok(Self {
            source: self.source,
            start: self.start + offset,
            len,
        })
    }
}

impl PartialEq for TextSlice<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextSlice<'_> {}

impl PartialEq<str> for TextSlice<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextSlice<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for TextSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.as_str(), self.start, self.end())
    }
}

impl fmt::Display for TextSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> From<&'a str> for TextSlice<'a> {
    fn from(source: &'a str) -> Self {
        TextSlice::new(source)
    }
}
