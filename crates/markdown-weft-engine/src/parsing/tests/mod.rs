//! Whole-document parsing tests.
//!
//! Each case is checked against the structural invariants and snapshotted as
//! an outline (see [`crate::sink::outline`] for the run token syntax).


use insta::assert_snapshot;

use crate::{parsing::parse_document, sink::outline};

fn outline_of(md: &str) -> String {
    let doc = parse_document(md).unwrap();
    invariants::check(&doc);
    outline(&doc)
}

#[test]
fn simple_paragraph() {
    assert_snapshot!(outline_of("Hello   *world*,\nsecond **line**."), @r"
    root
      paragraph: Hello [e]world|, second [s]line|.
    ");
}

#[test]
fn headings_rules_and_code() {
    assert_snapshot!(outline_of("# One\n### Three *em*\n---\n\n    indented\n    code\n\n```\nfenced\n  keeps indent\n```\n"), @r"
    root
      heading(1): One
      heading(3): Three [e]em
      rule
      code
        | indented
        | code
      code
        | fenced
        |   keeps indent
    ");
}

#[test]
fn list_in_quote_in_list() {
    assert_snapshot!(outline_of("- top\n- > - inner\n  > lazy\n- last"), @r"
    root
      list
        item(-) indent=0
          paragraph: top
        item(-) indent=0
          blockquote
            list
              item(-) indent=0
                paragraph: inner lazy
        item(-) indent=0
          paragraph: last
    ");
}

#[test]
fn ordered_list_numbering() {
    assert_snapshot!(outline_of("3. a\nb cont\n5. b\n6. c\n6. d\n\n1. fresh"), @r"
    root
      list
        item(3.) indent=0
          paragraph: a b cont
        item(5.) indent=0
          paragraph: b
        item(6.) indent=0
          paragraph: c
        item(7.) indent=0
          paragraph: d
      list
        item(1.) indent=0
          paragraph: fresh
    ");
}

#[test]
fn indented_items_and_multi_paragraph() {
    assert_snapshot!(outline_of("* one\n\n    more of one\n    * two\n        * three\n\n  not deeper"), @r"
    root
      list
        item(-) indent=0
          paragraph: one
          paragraph: more of one
        item(-) indent=1
          paragraph: two
        item(-) indent=2
          paragraph: three
      paragraph: not deeper
    ");
}

#[test]
fn links_and_images() {
    assert_snapshot!(outline_of("See [the *docs* [v2]](https://x.io/d) or ![logo](img/l.png).\n\n[broken](link and more"), @r"
    root
      paragraph: See [@https://x.io/d]the [e@https://x.io/d]docs [@https://x.io/d][v2] or ![logo](img/l.png)|.
      image #0: img/l.png
      paragraph: [broken](link and more
    ");
}

#[test]
fn inline_code_and_unclosed_styles() {
    assert_snapshot!(outline_of("run `a **b**` c ``x`y`` **open\n\n*a_"), @r"
    root
      paragraph: run [c]a [c]**b** c [c]x`y [s]open
      paragraph: [e]a_
    ");
}

#[test]
fn forced_break_and_blockquote_boundaries() {
    assert_snapshot!(outline_of("first  \nsecond\n\n> quote  \n> split\n\n> > deep"), @r"
    root
      paragraph: first
      paragraph: second
      blockquote
        paragraph: quote
      blockquote
        paragraph: split
      blockquote
        blockquote
          paragraph: deep
    ");
}

#[test]
fn unclosed_fence_is_text() {
    assert_snapshot!(outline_of("```\ncode"), @r"
    root
      paragraph: [c]code
    ");
}

#[test]
fn crlf_input() {
    assert_snapshot!(outline_of("# T\r\n\r\n- a\r\n- b\r\n"), @r"
    root
      heading(1): T
      list
        item(-) indent=0
          paragraph: a
        item(-) indent=0
          paragraph: b
    ");
}
