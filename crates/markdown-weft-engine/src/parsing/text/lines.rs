use super::slice::TextSlice;

/// Splits `source` into one view per line.
///
/// Lines are `\n` delimited and exclude the delimiter (and a `\r` before it).
/// A trailing newline does not produce an extra empty line. Each view keeps
/// its byte offset into `source`.
pub fn split_lines(source: &str) -> Vec<TextSlice<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0usize;
    for raw in source.split_inclusive('\n') {
        let start = offset;
        offset += raw.len();
        let body = raw.strip_suffix('\n').unwrap_or(raw);
        let body = body.strip_suffix('\r').unwrap_or(body);
        lines.push(line_view(source, start, body.len()));
    }
    lines
}

fn line_view(source: &str, start: usize, len: usize) -> TextSlice<'_> {
    // Both ends sit on ASCII delimiters or the ends of `source`.
    TextSlice::from_range(source, start, len).unwrap_or_else(|_| TextSlice::new(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        split_lines(source).into_iter().map(TextSlice::as_str).collect()
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(texts("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(texts("a\n\n\nb"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn crlf_is_stripped() {
        assert_eq!(texts("a  \r\nb\r\n"), vec!["a  ", "b"]);
    }

    #[test]
    fn offsets_point_into_source() {
        let src = "one\ntwo\nthree";
        let lines = split_lines(src);
        assert_eq!(lines[1].start(), 4);
        assert_eq!(lines[2].start(), 8);
        assert_eq!(&src[lines[2].start()..lines[2].end()], "three");
    }
}
