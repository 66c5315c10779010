//! HTML fragment output.
//!
//! Class names follow the structure the parser sees (`md`, `bq`, `list`,
//! `li uli` / `li oli`, `indent`, `bullet`, `number`, `contents`, `code`),
//! so a stylesheet can reproduce the indent markers and bullets.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{Document, InlineRun, ListMarker, RunContent, TextStyle};

use super::{NodeSink, walk};

/// Writes HTML as the document is walked.
///
/// Handles index a stack of pending closing tags, so `close` must come in
/// reverse order of `open`, which [`walk`] guarantees.
#[derive(Debug, Default)]
pub struct HtmlSink {
    out: String,
    closers: Vec<&'static str>,
}

impl HtmlSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn open(&mut self, tag: &str, closer: &'static str) -> usize {
        self.out.push_str(tag);
        self.closers.push(closer);
        self.closers.len() - 1
    }
}

/// Renders a whole document as an HTML fragment.
pub fn to_html(doc: &Document) -> String {
    let mut sink = HtmlSink::new();
    walk(doc, &mut sink);
    sink.finish()
}

impl NodeSink for HtmlSink {
    type Handle = usize;

    fn open_root(&mut self) -> usize {
        self.open("<div class=\"md\">\n", "</div>\n")
    }

    fn open_blockquote(&mut self, _parent: usize) -> usize {
        self.open("<blockquote class=\"bq\">\n", "</blockquote>\n")
    }

    fn open_list(&mut self, _parent: usize) -> usize {
        self.open("<div class=\"list\">\n", "</div>\n")
    }

    fn open_list_item(&mut self, _parent: usize, marker: ListMarker, indent: usize) -> usize {
        let class = match marker {
            ListMarker::Unordered => "uli",
            ListMarker::Ordered { .. } => "oli",
        };
        self.out.push_str(&format!("<div class=\"li {class}\">"));
        for _ in 0..indent {
            self.out.push_str("<span class=\"indent\"></span>");
        }
        match marker {
            ListMarker::Unordered => self.out.push_str("<span class=\"bullet\">\u{2022}</span>"),
            ListMarker::Ordered { number } => self
                .out
                .push_str(&format!("<span class=\"number\">{number}.</span>")),
        }
        self.open("<div class=\"contents\">\n", "</div></div>\n")
    }

    fn open_code_block(&mut self, _parent: usize) -> usize {
        self.open("<pre class=\"code\"><code>", "</code></pre>\n")
    }

    fn emit_code_text(&mut self, _code: usize, text: &str) {
        self.out.push_str(&encode_text(text));
    }

    fn emit_heading(&mut self, _parent: usize, depth: u8, runs: &[InlineRun]) {
        self.out.push_str(&format!("<h{depth} class=\"h h{depth}\">"));
        render_runs(runs, &mut self.out);
        self.out.push_str(&format!("</h{depth}>\n"));
    }

    fn emit_horizontal_rule(&mut self, _parent: usize) {
        self.out.push_str("<hr class=\"hr\">\n");
    }

    fn emit_paragraph(&mut self, _parent: usize, runs: &[InlineRun]) {
        self.out.push_str("<p class=\"p\">");
        render_runs(runs, &mut self.out);
        self.out.push_str("</p>\n");
    }

    fn close(&mut self, handle: usize) {
        while self.closers.len() > handle {
            if let Some(closer) = self.closers.pop() {
                self.out.push_str(closer);
            }
        }
    }
}

/// Writes runs, merging neighbours that share a style and link into one
/// element.
fn render_runs(runs: &[InlineRun], out: &mut String) {
    let mut i = 0;
    while i < runs.len() {
        match &runs[i].content {
            RunContent::Image(image) => {
                out.push_str(&format!(
                    "<img class=\"image\" src=\"{}\" alt=\"{}\">",
                    encode_double_quoted_attribute(&image.url),
                    encode_double_quoted_attribute(&image.title)
                ));
                i += 1;
            }
            RunContent::Text { style, link, .. } => {
                let end = runs[i..]
                    .iter()
                    .position(|r| {
                        r.image().is_some() || r.style() != *style || r.link() != link.as_deref()
                    })
                    .map_or(runs.len(), |n| i + n);
                render_group(&runs[i..end], *style, link.as_deref(), out);
                i = end;
            }
        }
        if i < runs.len() && runs[i - 1].space_after {
            out.push(' ');
        }
    }
}

fn render_group(group: &[InlineRun], style: TextStyle, link: Option<&str>, out: &mut String) {
    let mut tags = Vec::new();
    if let Some(url) = link {
        out.push_str(&format!(
            "<a class=\"a\" href=\"{}\">",
            encode_double_quoted_attribute(url)
        ));
        tags.push("</a>");
    }
    for (on, open, close) in [
        (style.strong, "<strong>", "</strong>"),
        (style.emphasis, "<em>", "</em>"),
        (style.code, "<code>", "</code>"),
    ] {
        if on {
            out.push_str(open);
            tags.push(close);
        }
    }
    for (j, run) in group.iter().enumerate() {
        out.push_str(&encode_text(run.text().unwrap_or_default()));
        if j + 1 < group.len() && run.space_after {
            out.push(' ');
        }
    }
    for close in tags.iter().rev() {
        out.push_str(close);
    }
}
