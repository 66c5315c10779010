//! Indented structural dump, one line per node.
//!
//! Used by the `outline` command and by snapshot tests. Run tokens carry
//! their style as a bracketed prefix: `[s]` strong, `[e]` emphasis, `[c]`
//! code, `[@url]` link target, combined as in `[se@url]`. Runs are separated
//! by a space where the source had whitespace and by `|` where it did not.

use crate::{
    images::ImageId,
    parsing::{Document, ImageRef, InlineRun, ListMarker, RunContent},
};

use super::{NodeSink, walk};

#[derive(Debug, Default)]
pub struct OutlineSink {
    lines: Vec<String>,
}

impl OutlineSink {
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", "  ".repeat(depth), text.as_ref()));
    }
}

pub fn outline(doc: &Document) -> String {
    let mut sink = OutlineSink::default();
    walk(doc, &mut sink);
    sink.finish()
}

impl NodeSink for OutlineSink {
    /// Nesting depth.
    type Handle = usize;

    fn open_root(&mut self) -> usize {
        self.line(0, "root");
        0
    }

    fn open_blockquote(&mut self, parent: usize) -> usize {
        self.line(parent + 1, "blockquote");
        parent + 1
    }

    fn open_list(&mut self, parent: usize) -> usize {
        self.line(parent + 1, "list");
        parent + 1
    }

    fn open_list_item(&mut self, parent: usize, marker: ListMarker, indent: usize) -> usize {
        let marker = match marker {
            ListMarker::Unordered => "-".to_string(),
            ListMarker::Ordered { number } => format!("{number}."),
        };
        self.line(parent + 1, format!("item({marker}) indent={indent}"));
        parent + 1
    }

    fn open_code_block(&mut self, parent: usize) -> usize {
        self.line(parent + 1, "code");
        parent + 1
    }

    fn emit_code_text(&mut self, code: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        for line in text.split('\n') {
            self.line(code + 1, format!("| {line}"));
        }
    }

    fn emit_heading(&mut self, parent: usize, depth: u8, runs: &[InlineRun]) {
        self.line(parent + 1, format!("heading({depth}): {}", runs_line(runs)));
    }

    fn emit_horizontal_rule(&mut self, parent: usize) {
        self.line(parent + 1, "rule");
    }

    fn emit_paragraph(&mut self, parent: usize, runs: &[InlineRun]) {
        self.line(parent + 1, format!("paragraph: {}", runs_line(runs)));
    }

    fn register_image(&mut self, parent: usize, id: ImageId, image: &ImageRef) {
        self.line(parent + 1, format!("image #{}: {}", id.0, image.url));
    }
}

fn runs_line(runs: &[InlineRun]) -> String {
    let mut out = String::new();
    for (i, run) in runs.iter().enumerate() {
        match &run.content {
            RunContent::Text { text, style, link } => {
                let mut flags = String::new();
                for (on, flag) in [(style.strong, 's'), (style.emphasis, 'e'), (style.code, 'c')] {
                    if on {
                        flags.push(flag);
                    }
                }
                if let Some(url) = link {
                    flags.push('@');
                    flags.push_str(url);
                }
                if !flags.is_empty() {
                    out.push_str(&format!("[{flags}]"));
                }
                out.push_str(text);
            }
            RunContent::Image(image) => {
                out.push_str(&format!("![{}]({})", image.title, image.url));
            }
        }
        if i + 1 < runs.len() {
            out.push(if run.space_after { ' ' } else { '|' });
        }
    }
    out
}
