//! Markdown parsing engine.
//!
//! [`parsing::parse_document`] turns source text into a [`Document`] of
//! nested blocks with word-level inline runs. [`sink::walk`] replays a
//! document into any [`sink::NodeSink`]; HTML and outline sinks ship with the
//! crate. [`images`] and [`links`] are the seams a viewer plugs into.

pub mod images;
pub mod links;
pub mod parsing;
pub mod sink;

pub use images::{CancelToken, FetchError, ImageData, ImageEvent, ImageFetcher, ImageId, ImageLoader};
pub use links::{LinkHandler, LogLinkHandler};
pub use parsing::{
    Block, Document, ImageRef, InlineRun, ListMarker, ParseError, RunContent, TextStyle,
    parse_document,
};
pub use sink::{HtmlSink, NodeSink, OutlineSink, outline, to_html, walk};
