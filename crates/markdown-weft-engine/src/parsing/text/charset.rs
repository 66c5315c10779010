/// Characters treated as whitespace by every trim and boundary test.
///
/// Space, tab, line feed, vertical tab, form feed and carriage return. Only
/// ASCII is considered so byte offsets always land on char boundaries.
pub const WHITESPACE: &[u8] = b" \t\n\x0B\x0C\r";

/// ASCII decimal digits, used for ordered list numbers.
pub const DIGITS: &[u8] = b"0123456789";

/// Returns true if `b` is one of [`WHITESPACE`].
pub fn is_whitespace(b: u8) -> bool {
    WHITESPACE.contains(&b)
}
