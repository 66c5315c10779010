use crate::parsing::text::TextSlice;

/// A cursor for character-by-character inline parsing with position tracking.
///
/// Operates over a [`TextSlice`]; `i` is relative to the slice, so a nested
/// parse of a link title starts again at zero.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    /// The text being parsed.
    pub s: TextSlice<'a>,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: TextSlice<'a>) -> Self {
        Self { s, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.contains_at(pat, self.i)
    }

    /// Length of the run of `b` at the cursor.
    pub fn count(&self, b: u8) -> usize {
        self.s.count(b, self.i)
    }

    /// Advances by `n` bytes. The caller must have matched them.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes and returns the next full character.
    pub fn bump_char(&mut self) -> Option<char> {
        let ch = self.s.as_str().get(self.i..)?.chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}
