//! Turns a parsed document into styled terminal lines.
//!
//! [`TuiSink`] is a [`NodeSink`]: container blocks become line prefixes
//! (quote bars, list markers, code indent), leaves become lines. Link spans
//! and image placeholders are recorded by position so the viewer can
//! highlight a link or rewrite a placeholder once its image has loaded.

use std::collections::HashMap;

use markdown_weft_engine::{
    Document, FetchError, ImageData, ImageId, ImageRef, InlineRun, ListMarker, NodeSink,
    RunContent, TextStyle, walk,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const QUOTE_BAR: &str = "│ ";
const CODE_INDENT: &str = "    ";
const BULLET: &str = "• ";
const INDENT: &str = "  ";
const RULE_WIDTH: usize = 40;

/// Where a link's text sits in the rendered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpot {
    pub line: usize,
    /// Span indices within that line.
    pub spans: std::ops::Range<usize>,
    pub url: String,
}

/// A placeholder line waiting for its image.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    pub line: usize,
    prefix: String,
    image: ImageRef,
}

/// What the viewer knows about an image so far.
#[derive(Debug, Clone, Copy)]
pub enum ImageStatus<'a> {
    Pending,
    Loaded(&'a ImageData),
    Failed(&'a FetchError),
}

/// One level of container nesting.
#[derive(Debug)]
struct Frame {
    parent: Option<usize>,
    /// Prefix for the first line drawn inside this frame.
    lead: String,
    /// Prefix for every later line.
    rest: String,
    used: bool,
    is_item: bool,
}

#[derive(Debug, Default)]
pub struct TuiSink {
    frames: Vec<Frame>,
    lines: Vec<Line<'static>>,
    links: Vec<LinkSpot>,
    images: HashMap<ImageId, ImageSlot>,
    last_blank: bool,
    show_link_targets: bool,
}

/// Rendered output of [`TuiSink`].
#[derive(Debug, Default)]
pub struct Rendered {
    pub lines: Vec<Line<'static>>,
    pub links: Vec<LinkSpot>,
    pub images: HashMap<ImageId, ImageSlot>,
}

impl TuiSink {
    pub fn new(show_link_targets: bool) -> Self {
        Self {
            show_link_targets,
            ..Self::default()
        }
    }

    pub fn finish(self) -> Rendered {
        Rendered {
            lines: self.lines,
            links: self.links,
            images: self.images,
        }
    }

    fn push_frame(&mut self, parent: Option<usize>, lead: String, rest: String) -> usize {
        let is_item = lead != rest;
        self.frames.push(Frame {
            parent,
            lead,
            rest,
            used: false,
            is_item,
        });
        self.frames.len() - 1
    }

    fn chain(&self, handle: usize) -> Vec<usize> {
        let mut chain = vec![handle];
        let mut at = handle;
        while let Some(parent) = self.frames[at].parent {
            chain.push(parent);
            at = parent;
        }
        chain.reverse();
        chain
    }

    /// Prefix for a new line inside `handle`. Consuming takes any list
    /// marker still waiting to be drawn.
    fn prefix(&mut self, handle: usize, consume: bool) -> String {
        let mut out = String::new();
        for i in self.chain(handle) {
            let frame = &mut self.frames[i];
            if consume && !frame.used {
                out.push_str(&frame.lead);
                frame.used = true;
            } else {
                out.push_str(&frame.rest);
            }
        }
        out
    }

    /// An item whose marker line has not been drawn yet.
    fn awaiting_marker(&self, handle: usize) -> bool {
        self.chain(handle)
            .into_iter()
            .any(|i| self.frames[i].is_item && !self.frames[i].used)
    }

    fn push_line(&mut self, spans: Vec<Span<'static>>) -> usize {
        self.last_blank = spans.iter().all(|s| s.content.trim().is_empty());
        self.lines.push(Line::from(spans));
        self.lines.len() - 1
    }

    /// Blank line between blocks, except at the top or on an item's marker line.
    fn gap(&mut self, parent: usize) {
        if self.lines.is_empty() || self.last_blank || self.awaiting_marker(parent) {
            return;
        }
        let prefix = self.prefix(parent, false);
        self.push_line(vec![Span::raw(prefix.trim_end().to_string())]);
        self.last_blank = true;
    }

    /// Renders runs onto one line, recording any link spans.
    fn push_runs(&mut self, mut spans: Vec<Span<'static>>, runs: &[InlineRun], base: Style) {
        let line = self.lines.len();
        let mut open: Option<(usize, String)> = None;

        for run in runs {
            let link = run.link().map(str::to_string);
            if open.as_ref().map(|(_, url)| url) != link.as_ref() {
                self.close_link(line, &mut spans, open.take());
                open = link.map(|url| (spans.len(), url));
            }

            let mut text = match &run.content {
                RunContent::Text { text, .. } => text.clone(),
                RunContent::Image(image) => format!("[image: {}]", image.title),
            };
            if run.space_after {
                text.push(' ');
            }
            let style = match &run.content {
                RunContent::Image(_) => base.fg(Color::Magenta),
                RunContent::Text { style, link, .. } => {
                    let style = run_style(base, *style);
                    if link.is_some() {
                        style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
                    } else {
                        style
                    }
                }
            };
            spans.push(Span::styled(text, style));
        }
        self.close_link(line, &mut spans, open);
        self.push_line(spans);
    }

    fn close_link(
        &mut self,
        line: usize,
        spans: &mut Vec<Span<'static>>,
        open: Option<(usize, String)>,
    ) {
        let Some((start, url)) = open else {
            return;
        };
        self.links.push(LinkSpot {
            line,
            spans: start..spans.len(),
            url: url.clone(),
        });
        if self.show_link_targets {
            spans.push(Span::styled(
                format!("<{url}> "),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
}

fn run_style(base: Style, style: TextStyle) -> Style {
    let mut out = base;
    if style.strong {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.emphasis {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.code {
        out = out.fg(Color::Yellow);
    }
    out
}

/// The text of an image placeholder line.
pub fn image_line(slot: &ImageSlot, status: ImageStatus<'_>) -> Line<'static> {
    let detail = match status {
        ImageStatus::Pending => "loading…".to_string(),
        ImageStatus::Loaded(data) => match data.dimensions {
            Some((w, h)) => format!("{} bytes, {w}×{h}", data.len()),
            None => format!("{} bytes", data.len()),
        },
        ImageStatus::Failed(err) => format!("failed: {err}"),
    };
    let style = match status {
        ImageStatus::Failed(_) => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Magenta),
    };
    Line::from(vec![
        Span::raw(slot.prefix.clone()),
        Span::styled(
            format!("↳ {} ({}): {detail}", slot.image.title, slot.image.url),
            style,
        ),
    ])
}

impl NodeSink for TuiSink {
    type Handle = usize;

    fn open_root(&mut self) -> usize {
        self.push_frame(None, String::new(), String::new())
    }

    fn open_blockquote(&mut self, parent: usize) -> usize {
        self.gap(parent);
        self.push_frame(Some(parent), QUOTE_BAR.into(), QUOTE_BAR.into())
    }

    fn open_list(&mut self, parent: usize) -> usize {
        // Nested lists stay tight under their item.
        if !self.frames[parent].is_item {
            self.gap(parent);
        }
        self.push_frame(Some(parent), String::new(), String::new())
    }

    fn open_list_item(&mut self, parent: usize, marker: ListMarker, indent: usize) -> usize {
        let mut lead = INDENT.repeat(indent);
        match marker {
            ListMarker::Unordered => lead.push_str(BULLET),
            ListMarker::Ordered { number } => lead.push_str(&format!("{number}. ")),
        }
        let rest = " ".repeat(lead.chars().count());
        self.push_frame(Some(parent), lead, rest)
    }

    fn open_code_block(&mut self, parent: usize) -> usize {
        self.gap(parent);
        self.push_frame(Some(parent), String::new(), String::new())
    }

    fn emit_code_text(&mut self, code: usize, text: &str) {
        let style = Style::default().fg(Color::Yellow);
        for line in text.split('\n') {
            let prefix = self.prefix(code, true);
            self.push_line(vec![
                Span::raw(prefix),
                Span::styled(format!("{CODE_INDENT}{line}"), style),
            ]);
        }
    }

    fn emit_heading(&mut self, parent: usize, depth: u8, runs: &[InlineRun]) {
        self.gap(parent);
        let base = Style::default().add_modifier(Modifier::BOLD);
        let base = if depth == 1 {
            base.add_modifier(Modifier::UNDERLINED)
        } else {
            base
        };
        let prefix = self.prefix(parent, true);
        let spans = vec![
            Span::raw(prefix),
            Span::styled(format!("{} ", "#".repeat(depth as usize)), base),
        ];
        self.push_runs(spans, runs, base);
    }

    fn emit_horizontal_rule(&mut self, parent: usize) {
        self.gap(parent);
        let prefix = self.prefix(parent, true);
        self.push_line(vec![
            Span::raw(prefix),
            Span::styled("─".repeat(RULE_WIDTH), Style::default().fg(Color::DarkGray)),
        ]);
    }

    fn emit_paragraph(&mut self, parent: usize, runs: &[InlineRun]) {
        self.gap(parent);
        let prefix = self.prefix(parent, true);
        self.push_runs(vec![Span::raw(prefix)], runs, Style::default());
    }

    fn register_image(&mut self, parent: usize, id: ImageId, image: &ImageRef) {
        let slot = ImageSlot {
            line: self.lines.len(),
            prefix: self.prefix(parent, false),
            image: image.clone(),
        };
        let line = image_line(&slot, ImageStatus::Pending);
        self.lines.push(line);
        self.last_blank = false;
        self.images.insert(id, slot);
    }

    fn close(&mut self, handle: usize) {
        // An item with no content still shows its marker.
        if self.frames[handle].is_item && !self.frames[handle].used {
            let prefix = self.prefix(handle, true);
            self.push_line(vec![Span::raw(prefix)]);
        }
    }
}

/// Renders `doc` for the terminal.
pub fn render(doc: &Document, show_link_targets: bool) -> Rendered {
    let mut sink = TuiSink::new(show_link_targets);
    walk(doc, &mut sink);
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_weft_engine::parse_document;
    use pretty_assertions::assert_eq;

    fn plain(doc: &str) -> Vec<String> {
        let doc = parse_document(doc).unwrap();
        render(&doc, false)
            .lines
            .iter()
            .map(|l| l.to_string().trim_end().to_string())
            .collect()
    }

    #[test]
    fn headings_and_paragraphs_are_separated() {
        assert_eq!(
            plain("# Title\n\nSome *text* here.\n\n---"),
            vec!["# Title", "", "Some text here.", "", "─".repeat(RULE_WIDTH).as_str()]
        );
    }

    #[test]
    fn list_markers_and_nesting() {
        assert_eq!(
            plain("- one\n- two\n    - deep\n\n3. three"),
            vec!["• one", "• two", "  • deep", "", "3. three"]
        );
    }

    #[test]
    fn quote_bars_prefix_every_line() {
        assert_eq!(
            plain("> first\n>\n>\n>     code"),
            vec!["│ first", "│", "│     code"]
        );
    }

    #[test]
    fn code_lines_keep_their_text() {
        assert_eq!(
            plain("```\nfn main() {}\n  x\n```"),
            vec!["    fn main() {}", "      x"]
        );
    }

    #[test]
    fn link_spans_are_recorded() {
        let doc = parse_document("see [the docs](https://d) now").unwrap();
        let out = render(&doc, false);
        assert_eq!(
            out.links,
            vec![LinkSpot {
                line: 0,
                spans: 2..4,
                url: "https://d".into()
            }]
        );
        assert_eq!(out.lines[0].to_string().trim_end(), "see the docs now");
    }

    #[test]
    fn link_targets_can_be_shown() {
        let doc = parse_document("[a](u) b").unwrap();
        let out = render(&doc, true);
        assert_eq!(out.lines[0].to_string().trim_end(), "a <u> b");
    }

    #[test]
    fn images_get_placeholder_lines() {
        let doc = parse_document("> ![logo](l.png)").unwrap();
        let out = render(&doc, false);
        assert_eq!(
            out.lines[0].to_string().trim_end(),
            "│ [image: logo]"
        );
        let slot = &out.images[&ImageId(0)];
        assert_eq!(slot.line, 1);
        assert_eq!(
            out.lines[1].to_string(),
            "│ ↳ logo (l.png): loading…"
        );

        let data = ImageData::from_bytes(b"GIF89a\x02\x00\x03\x00".to_vec());
        assert_eq!(
            image_line(slot, ImageStatus::Loaded(&data)).to_string(),
            "│ ↳ logo (l.png): 10 bytes, 2×3"
        );
        let err = FetchError::Status(404);
        assert_eq!(
            image_line(slot, ImageStatus::Failed(&err)).to_string(),
            "│ ↳ logo (l.png): failed: HTTP 404"
        );
    }

    #[test]
    fn empty_item_still_shows_marker() {
        assert_eq!(plain("- "), vec!["•"]);
    }
}
