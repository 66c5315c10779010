use log::trace;

use crate::parsing::text::charset::is_whitespace;

use super::{
    kinds::Marker,
    types::{ImageRef, InlineRun, RunContent, TextStyle},
};

/// Mutable formatting state shared by a block's whole inline parse,
/// including the recursive parse of link titles.
///
/// Text accumulates in `pending` until a style change forces a flush; the
/// flush cuts it into words that all carry the style active at that moment.
#[derive(Debug, Default)]
pub struct SpanState {
    runs: Vec<InlineRun>,
    pending: String,
    /// Whitespace was seen since the last emitted run.
    space_before_next: bool,
    /// Tag that opened strong text, if open.
    strong: Option<&'static str>,
    /// Tag that opened emphasis, if open.
    emphasis: Option<&'static str>,
    /// Backtick run length that opened inline code, if open.
    code_ticks: Option<usize>,
    link: Option<String>,
}

impl SpanState {
    pub fn in_code(&self) -> bool {
        self.code_ticks.is_some()
    }

    pub fn code_ticks(&self) -> Option<usize> {
        self.code_ticks
    }

    pub fn in_link(&self) -> bool {
        self.link.is_some()
    }

    pub fn push_char(&mut self, ch: char) {
        self.pending.push(ch);
    }

    /// Flips `marker` using `tag`.
    ///
    /// Opening always succeeds. Closing only succeeds with the same tag that
    /// opened it, so `**a__` leaves strong open. Returns whether the tag was
    /// consumed.
    pub fn toggle(&mut self, marker: Marker, tag: &'static str) -> bool {
        let open = match marker {
            Marker::Strong => self.strong,
            Marker::Emphasis => self.emphasis,
        };
        if open.is_some_and(|opened| opened != tag) {
            return false;
        }
        self.flush();
        let slot = match marker {
            Marker::Strong => &mut self.strong,
            Marker::Emphasis => &mut self.emphasis,
        };
        *slot = if open.is_some() { None } else { Some(tag) };
        true
    }

    pub fn open_code(&mut self, ticks: usize) {
        self.flush();
        self.code_ticks = Some(ticks);
    }

    pub fn close_code(&mut self) {
        self.flush();
        self.code_ticks = None;
    }

    pub fn open_link(&mut self, url: &str) {
        self.flush();
        self.link = Some(url.to_string());
    }

    pub fn close_link(&mut self) {
        self.flush();
        self.link = None;
    }

    pub fn push_image(&mut self, image: ImageRef) {
        self.flush();
        self.push(RunContent::Image(image));
    }

    fn style(&self) -> TextStyle {
        let code = self.code_ticks.is_some();
        TextStyle {
            strong: !code && self.strong.is_some(),
            emphasis: !code && self.emphasis.is_some(),
            code,
        }
    }

    /// Cuts pending text into word runs carrying the current style.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        let before = self.runs.len();
        let mut word = String::new();
        for ch in pending.chars() {
            if ch.is_ascii() && is_whitespace(ch as u8) {
                self.push_word(&mut word);
                self.space_before_next = true;
            } else {
                word.push(ch);
            }
        }
        self.push_word(&mut word);
        trace!(
            "flushed {} word(s) with {:?}",
            self.runs.len() - before,
            self.style()
        );
    }

    fn push_word(&mut self, word: &mut String) {
        if word.is_empty() {
            return;
        }
        let content = RunContent::Text {
            text: std::mem::take(word),
            style: self.style(),
            link: self.link.clone(),
        };
        self.push(content);
    }

    fn push(&mut self, content: RunContent) {
        if self.space_before_next
            && let Some(last) = self.runs.last_mut()
        {
            last.space_after = true;
        }
        self.space_before_next = false;
        self.runs.push(InlineRun {
            content,
            space_after: false,
        });
    }

    /// Flushes what is left. Unclosed styles simply stay applied.
    pub fn finish(mut self) -> Vec<InlineRun> {
        self.flush();
        self.runs
    }
}
