use crate::parsing::text::{SliceError, TextSlice};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link},
    state::SpanState,
    types::{ImageRef, InlineRun},
};

/// Parses one block's assembled text into word-level [`InlineRun`]s.
///
/// Malformed constructs never fail: an unmatched `[` is plain text and an
/// unclosed style or code span runs to the end of the text.
pub fn parse_inline(text: TextSlice<'_>) -> Result<Vec<InlineRun>, SliceError> {
    let mut state = SpanState::default();
    parse_into(text, &mut state)?;
    Ok(state.finish())
}

/// Scans `text` left to right, feeding `state`.
///
/// Link titles recurse into this with the link held open, which is how a
/// link can contain emphasis or an image.
fn parse_into(text: TextSlice<'_>, state: &mut SpanState) -> Result<(), SliceError> {
    let mut cur = Cursor::new(text);

    while !cur.eof() {
        if !state.in_code() {
            if try_toggle(&mut cur, state) {
                continue;
            }

            if !state.in_link()
                && let Some(link) = Link::parse_at(text, cur.i)?
            {
                state.open_link(link.url.as_str());
                parse_into(link.title, state)?;
                state.close_link();
                cur.bump_n(link.len);
                continue;
            }

            if let Some(image) = Image::parse_at(text, cur.i)? {
                state.push_image(ImageRef {
                    title: image.title.to_string(),
                    url: image.url.to_string(),
                });
                cur.bump_n(image.len);
                continue;
            }
        }

        let ticks = cur.count(CodeSpan::TICK);
        if ticks > 0 {
            match state.code_ticks() {
                None => state.open_code(ticks),
                Some(open) if open == ticks => state.close_code(),
                // A run of the wrong length is literal text inside code.
                Some(_) => (0..ticks).for_each(|_| state.push_char(char::from(CodeSpan::TICK))),
            }
            cur.bump_n(ticks);
            continue;
        }

        if let Some(ch) = cur.bump_char() {
            state.push_char(ch);
        }
    }

    Ok(())
}

fn try_toggle(cur: &mut Cursor<'_>, state: &mut SpanState) -> bool {
    for (tag, marker) in Emphasis::TAGS {
        if cur.starts_with(tag) && state.toggle(marker, tag) {
            cur.bump_n(tag.len());
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::inline::types::{RunContent, TextStyle};

    fn parse(s: &str) -> Vec<InlineRun> {
        parse_inline(TextSlice::new(s)).unwrap()
    }

    fn text(s: &str, style: TextStyle, space_after: bool) -> InlineRun {
        InlineRun {
            content: RunContent::Text {
                text: s.into(),
                style,
                link: None,
            },
            space_after,
        }
    }

    const PLAIN: TextStyle = TextStyle {
        strong: false,
        emphasis: false,
        code: false,
    };
    const EM: TextStyle = TextStyle {
        strong: false,
        emphasis: true,
        code: false,
    };
    const STRONG: TextStyle = TextStyle {
        strong: true,
        emphasis: false,
        code: false,
    };
    const CODE: TextStyle = TextStyle {
        strong: false,
        emphasis: false,
        code: true,
    };

    #[test]
    fn plain_words() {
        assert_eq!(
            parse("hello world"),
            vec![text("hello", PLAIN, true), text("world", PLAIN, false)]
        );
    }

    #[test]
    fn strong_and_emphasis() {
        assert_eq!(
            parse("a **b** _c_"),
            vec![
                text("a", PLAIN, true),
                text("b", STRONG, true),
                text("c", EM, false),
            ]
        );
    }

    #[test]
    fn mismatched_emphasis_stays_open() {
        assert_eq!(parse("*a_"), vec![text("a_", EM, false)]);
    }

    #[test]
    fn strong_closes_only_with_its_own_tag() {
        let runs = parse("__a** b__ c");
        // `**` cannot close `__`, so it is read as two emphasis toggles.
        assert_eq!(
            runs,
            vec![
                text("a", STRONG, true),
                text("b", STRONG, true),
                text("c", PLAIN, false),
            ]
        );
    }

    #[test]
    fn inline_code_suppresses_markers() {
        assert_eq!(
            parse("`a *b*` c"),
            vec![
                text("a", CODE, true),
                text("*b*", CODE, true),
                text("c", PLAIN, false),
            ]
        );
    }

    #[test]
    fn code_closes_only_on_matching_run() {
        assert_eq!(
            parse("``a`b`` c"),
            vec![text("a`b", CODE, true), text("c", PLAIN, false)]
        );
    }

    #[test]
    fn unterminated_code_runs_to_end() {
        assert_eq!(
            parse("x `y z"),
            vec![
                text("x", PLAIN, true),
                text("y", CODE, true),
                text("z", CODE, false),
            ]
        );
    }

    #[test]
    fn link_with_nested_brackets() {
        let runs = parse("[a [b] c](http://x)");
        let words: Vec<_> = runs.iter().map(|r| r.text().unwrap()).collect();
        assert_eq!(words, vec!["a", "[b]", "c"]);
        assert!(runs.iter().all(|r| r.link() == Some("http://x")));
    }

    #[test]
    fn link_title_is_inline_parsed() {
        let runs = parse("go [**here**](u) now");
        assert_eq!(runs[1].text(), Some("here"));
        assert!(runs[1].style().strong);
        assert_eq!(runs[1].link(), Some("u"));
        assert!(runs[1].space_after);
        assert_eq!(runs[2].link(), None);
    }

    #[test]
    fn unclosed_link_is_literal() {
        assert_eq!(
            parse("[a](url"),
            vec![text("[a](url", PLAIN, false)]
        );
    }

    #[test]
    fn image_becomes_reference_run() {
        let runs = parse("see ![logo](img.png)");
        assert_eq!(runs.len(), 2);
        assert_eq!(
            runs[1].image(),
            Some(&ImageRef {
                title: "logo".into(),
                url: "img.png".into()
            })
        );
        assert!(runs[0].space_after);
    }

    #[test]
    fn image_inside_link_title() {
        let runs = parse("[![i](p)](u)");
        assert_eq!(runs.len(), 1);
        assert!(runs[0].image().is_some());
    }

    #[test]
    fn links_do_not_nest() {
        let runs = parse("[x [y](v) z](u)");
        let words: Vec<_> = runs.iter().map(|r| r.text().unwrap()).collect();
        assert_eq!(words, vec!["x", "[y](v)", "z"]);
        assert!(runs.iter().all(|r| r.link() == Some("u")));
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            parse("naïve *café*"),
            vec![text("naïve", PLAIN, true), text("café", EM, false)]
        );
    }
}
