use crate::parsing::text::{SliceError, TextSlice, charset::is_whitespace};

/// `[title](url)` delimiters.
pub struct Link;

/// `![title](url)`: a link prefixed with `!`.
pub struct Image;

/// A recognised link or image at some offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    /// Text between the outer brackets. May itself contain balanced `[...]`.
    pub title: TextSlice<'a>,
    /// Text between `(` and the first `)`.
    pub url: TextSlice<'a>,
    /// Bytes consumed, from the opening `[` (or `!`) through `)`.
    pub len: usize,
}

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Tries to read a link starting exactly at `at`.
    ///
    /// Returns `Ok(None)` when the brackets don't balance, when anything but
    /// whitespace sits between `]` and `(`, or when `)` is missing.
    pub fn parse_at(text: TextSlice<'_>, at: usize) -> Result<Option<LinkMatch<'_>>, SliceError> {
        if text.byte_at(at) != Some(Self::OPEN) {
            return Ok(None);
        }
        let bytes = text.as_str().as_bytes();

        let title_start = at + 1;
        let mut depth = 0usize;
        let mut title_end = None;
        for (i, b) in bytes.iter().enumerate().skip(title_start) {
            match *b {
                Self::OPEN => depth += 1,
                Self::CLOSE if depth > 0 => depth -= 1,
                Self::CLOSE => {
                    title_end = Some(i);
                    break;
                }
                _ => {}
            }
        }
        let Some(title_end) = title_end else {
            return Ok(None);
        };

        let mut i = title_end + 1;
        while bytes.get(i).is_some_and(|b| is_whitespace(*b)) {
            i += 1;
        }
        if bytes.get(i) != Some(&Self::URL_OPEN) {
            return Ok(None);
        }

        let url_start = i + 1;
        let Some(url_len) = bytes[url_start..]
            .iter()
            .position(|b| *b == Self::URL_CLOSE)
        else {
            return Ok(None);
        };

        Ok(Some(LinkMatch {
            title: text.substring(title_start, title_end - title_start)?,
            url: text.substring(url_start, url_len)?,
            len: url_start + url_len + 1 - at,
        }))
    }
}

impl Image {
    pub const BANG: u8 = b'!';

    /// Tries to read an image starting exactly at `at`.
    pub fn parse_at(text: TextSlice<'_>, at: usize) -> Result<Option<LinkMatch<'_>>, SliceError> {
        if text.byte_at(at) != Some(Self::BANG) {
            return Ok(None);
        }
        Ok(Link::parse_at(text, at + 1)?.map(|m| LinkMatch { len: m.len + 1, ..m }))
    }
}
