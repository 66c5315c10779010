use serde::Serialize;

/// Style flags active when a text run was flushed.
///
/// Inside inline code only `code` is set; strong and emphasis markers are not
/// recognised there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

/// An `![title](url)` reference. Loading is left to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub title: String,
    pub url: String,
}

/// What a run carries: one styled word, or an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunContent {
    Text {
        text: String,
        style: TextStyle,
        /// Target of the enclosing link, if any.
        link: Option<String>,
    },
    Image(ImageRef),
}

/// One word-level unit of inline output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineRun {
    #[serde(flatten)]
    pub content: RunContent,
    /// Whitespace separated this run from the next one in the source.
    ///
    /// Renderers use it to reproduce single-space word flow even when the
    /// style changes between two runs.
    pub space_after: bool,
}

impl InlineRun {
    /// The word, for text runs.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text { text, .. } => Some(text),
            RunContent::Image(_) => None,
        }
    }

    pub fn style(&self) -> TextStyle {
        match &self.content {
            RunContent::Text { style, .. } => *style,
            RunContent::Image(_) => TextStyle::default(),
        }
    }

    pub fn link(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text { link, .. } => link.as_deref(),
            RunContent::Image(_) => None,
        }
    }

    pub fn image(&self) -> Option<&ImageRef> {
        match &self.content {
            RunContent::Image(image) => Some(image),
            RunContent::Text { .. } => None,
        }
    }
}
