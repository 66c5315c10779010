//! Background image resolution.
//!
//! The parser only records `![title](url)` references. A host that wants the
//! pixels hands an [`ImageFetcher`] to an [`ImageLoader`], requests the ids
//! it registered while walking the document, and drains [`ImageEvent`]s from
//! its event loop to update placeholders in place.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    time::Duration,
};

use log::{debug, warn};

use crate::parsing::Document;

/// Position of an image reference in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub usize);

/// Shared flag telling in-flight fetches to give up.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("cancelled")]
    Cancelled,
}

/// A loaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    /// Pixel size, when the header is a format we can read.
    pub dimensions: Option<(u32, u32)>,
}

impl ImageData {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let dimensions = png_dimensions(&bytes).or_else(|| gif_dimensions(&bytes));
        Self { bytes, dimensions }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// PNG: 8-byte signature, then the IHDR chunk with big-endian width and
/// height at bytes 16..24.
fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < 24 || &data[0..8] != b"\x89PNG\r\n\x1a\n" {
        return None;
    }
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Some((width, height))
}

/// GIF: `GIF87a` or `GIF89a`, then little-endian u16 width and height.
fn gif_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < 10 || !(data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a")) {
        return None;
    }
    let width = u16::from_le_bytes([data[6], data[7]]);
    let height = u16::from_le_bytes([data[8], data[9]]);
    Some((u32::from(width), u32::from(height)))
}

/// Resolves an image URL to its bytes.
///
/// Called on a worker thread. Long fetches should check `cancel` between
/// steps and return [`FetchError::Cancelled`].
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: &str, cancel: &CancelToken) -> Result<ImageData, FetchError>;
}

/// Outcome of one requested image.
#[derive(Debug)]
pub struct ImageEvent {
    pub id: ImageId,
    pub url: String,
    pub result: Result<ImageData, FetchError>,
}

/// Runs fetches on the rayon pool and reports them over a channel.
///
/// Dropping the loader cancels whatever is still in flight.
pub struct ImageLoader {
    fetcher: Arc<dyn ImageFetcher>,
    tx: Sender<ImageEvent>,
    rx: Receiver<ImageEvent>,
    cancel: CancelToken,
}

impl ImageLoader {
    pub fn new(fetcher: Arc<dyn ImageFetcher>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            fetcher,
            tx,
            rx,
            cancel: CancelToken::new(),
        }
    }

    /// Starts fetching `url`; its event arrives later under `id`.
    pub fn request(&self, id: ImageId, url: &str) {
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();
        let url = url.to_string();
        debug!("requesting image {} from {url}", id.0);

        rayon::spawn(move || {
            let result = if cancel.is_cancelled() {
                Err(FetchError::Cancelled)
            } else {
                fetcher.fetch(&url, &cancel)
            };
            match &result {
                Ok(data) => debug!("image {} loaded: {} bytes", id.0, data.len()),
                Err(FetchError::Cancelled) => debug!("image {} cancelled", id.0),
                Err(e) => warn!("failed to load image {url}: {e}"),
            }
            // The receiver is gone once the host stops listening.
            let _ = tx.send(ImageEvent { id, url, result });
        });
    }

    /// Requests every image in `doc`, returning how many were requested.
    pub fn request_all(&self, doc: &Document) -> usize {
        let images = doc.images();
        for (id, image) in &images {
            self.request(*id, &image.url);
        }
        images.len()
    }

    /// A finished event, if one is waiting.
    pub fn try_next(&self) -> Option<ImageEvent> {
        self.rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event.
    pub fn wait_next(&self, timeout: Duration) -> Option<ImageEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl Drop for ImageLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
