//! # Node Sinks
//!
//! A [`NodeSink`] receives construction calls for a parsed [`Document`] and
//! builds whatever representation it likes: a widget tree, HTML, an outline.
//! [`walk`] drives a sink over a document in order.
//!
//! Every `open_*` call returns an opaque handle that later calls use as their
//! parent; [`walk`] closes each handle once its children are done.

pub mod html;
pub mod outline;

use crate::{
    images::ImageId,
    parsing::{Block, Document, ImageRef, InlineRun, ListMarker},
};

pub use html::{HtmlSink, to_html};
pub use outline::{OutlineSink, outline};

pub trait NodeSink {
    type Handle: Copy;

    fn open_root(&mut self) -> Self::Handle;
    fn open_blockquote(&mut self, parent: Self::Handle) -> Self::Handle;
    fn open_list(&mut self, parent: Self::Handle) -> Self::Handle;
    /// `indent` is the item's indent level, drawn before its marker.
    fn open_list_item(
        &mut self,
        parent: Self::Handle,
        marker: ListMarker,
        indent: usize,
    ) -> Self::Handle;
    fn open_code_block(&mut self, parent: Self::Handle) -> Self::Handle;
    fn emit_code_text(&mut self, code: Self::Handle, text: &str);
    fn emit_heading(&mut self, parent: Self::Handle, depth: u8, runs: &[InlineRun]);
    fn emit_horizontal_rule(&mut self, parent: Self::Handle);
    fn emit_paragraph(&mut self, parent: Self::Handle, runs: &[InlineRun]);

    /// Called after a heading or paragraph for each image among its runs.
    ///
    /// Hosts that load images keep `id` to update the placeholder later.
    fn register_image(&mut self, _parent: Self::Handle, _id: ImageId, _image: &ImageRef) {}

    fn close(&mut self, _handle: Self::Handle) {}
}

/// Feeds `doc` to `sink`, returning the root handle.
///
/// Image ids are assigned in document order, the same order as
/// [`Document::images`].
pub fn walk<S: NodeSink>(doc: &Document, sink: &mut S) -> S::Handle {
    let root = sink.open_root();
    let mut next_image = 0;
    walk_blocks(&doc.blocks, root, sink, &mut next_image);
    sink.close(root);
    root
}

fn walk_blocks<S: NodeSink>(
    blocks: &[Block],
    parent: S::Handle,
    sink: &mut S,
    next_image: &mut usize,
) {
    for block in blocks {
        match block {
            Block::Blockquote { children } => {
                let h = sink.open_blockquote(parent);
                walk_blocks(children, h, sink, next_image);
                sink.close(h);
            }
            Block::List { children } => {
                let h = sink.open_list(parent);
                walk_blocks(children, h, sink, next_image);
                sink.close(h);
            }
            Block::ListItem {
                marker,
                indent,
                children,
            } => {
                let h = sink.open_list_item(parent, *marker, *indent);
                walk_blocks(children, h, sink, next_image);
                sink.close(h);
            }
            Block::Code { text } => {
                let h = sink.open_code_block(parent);
                sink.emit_code_text(h, text);
                sink.close(h);
            }
            Block::Heading { depth, runs, .. } => {
                sink.emit_heading(parent, *depth, runs);
                register_images(runs, parent, sink, next_image);
            }
            Block::Paragraph { runs, .. } => {
                sink.emit_paragraph(parent, runs);
                register_images(runs, parent, sink, next_image);
            }
            Block::Rule => sink.emit_horizontal_rule(parent),
        }
    }
}

fn register_images<S: NodeSink>(
    runs: &[InlineRun],
    parent: S::Handle,
    sink: &mut S,
    next_image: &mut usize,
) {
    for image in runs.iter().filter_map(InlineRun::image) {
        sink.register_image(parent, ImageId(*next_image), image);
        *next_image += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::parse_document;

    /// Records calls as strings, handing out sequential handles.
    #[derive(Default)]
    struct Recorder {
        next: usize,
        calls: Vec<String>,
    }

    impl Recorder {
        fn handle(&mut self) -> usize {
            self.next += 1;
            self.next
        }
    }

    impl NodeSink for Recorder {
        type Handle = usize;

        fn open_root(&mut self) -> usize {
            let h = self.handle();
            self.calls.push(format!("root#{h}"));
            h
        }
        fn open_blockquote(&mut self, parent: usize) -> usize {
            let h = self.handle();
            self.calls.push(format!("quote#{h}<{parent}"));
            h
        }
        fn open_list(&mut self, parent: usize) -> usize {
            let h = self.handle();
            self.calls.push(format!("list#{h}<{parent}"));
            h
        }
        fn open_list_item(&mut self, parent: usize, marker: ListMarker, indent: usize) -> usize {
            let h = self.handle();
            self.calls
                .push(format!("item#{h}<{parent} {marker:?} indent={indent}"));
            h
        }
        fn open_code_block(&mut self, parent: usize) -> usize {
            let h = self.handle();
            self.calls.push(format!("code#{h}<{parent}"));
            h
        }
        fn emit_code_text(&mut self, code: usize, text: &str) {
            self.calls.push(format!("text<{code} {text:?}"));
        }
        fn emit_heading(&mut self, parent: usize, depth: u8, runs: &[InlineRun]) {
            self.calls.push(format!("h{depth}<{parent} runs={}", runs.len()));
        }
        fn emit_horizontal_rule(&mut self, parent: usize) {
            self.calls.push(format!("hr<{parent}"));
        }
        fn emit_paragraph(&mut self, parent: usize, runs: &[InlineRun]) {
            self.calls.push(format!("p<{parent} runs={}", runs.len()));
        }
        fn register_image(&mut self, parent: usize, id: ImageId, image: &ImageRef) {
            self.calls
                .push(format!("img{}<{parent} {}", id.0, image.url));
        }
        fn close(&mut self, handle: usize) {
            self.calls.push(format!("close#{handle}"));
        }
    }

    #[test]
    fn walk_order_and_handles() {
        let doc = parse_document("# T\n\n> ![a](x) b\n\n1. item\n\n```\ncode\n```\n---").unwrap();
        let mut rec = Recorder::default();
        walk(&doc, &mut rec);
        assert_eq!(
            rec.calls,
            vec![
                "root#1",
                "h1<1 runs=1",
                "quote#2<1",
                "p<2 runs=2",
                "img0<2 x",
                "close#2",
                "list#3<1",
                "item#4<3 Ordered { number: 1 } indent=0",
                "p<4 runs=1",
                "close#4",
                "close#3",
                "code#5<1",
                "text<5 \"code\"",
                "close#5",
                "hr<1",
                "close#1",
            ]
        );
    }

    #[test]
    fn image_ids_match_document_order() {
        let doc = parse_document("![a](1)\n\n- ![b](2) ![c](3)").unwrap();
        let mut rec = Recorder::default();
        walk(&doc, &mut rec);
        let registered: Vec<_> = rec
            .calls
            .iter()
            .filter(|c| c.starts_with("img"))
            .cloned()
            .collect();
        assert_eq!(registered, vec!["img0<1 1", "img1<3 2", "img2<3 3"]);
        let ids: Vec<_> = doc
            .images()
            .into_iter()
            .map(|(id, image)| (id.0, image.url.as_str()))
            .collect();
        assert_eq!(ids, vec![(0, "1"), (1, "2"), (2, "3")]);
    }
}
