//! Image fetching for the viewer: HTTP(S) through ureq, anything else from
//! disk.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use markdown_weft_engine::{CancelToken, FetchError, ImageData, ImageFetcher};
use ureq::Agent;

const FILE_SCHEME: &str = "file://";

/// Create a ureq agent with timeout and non-error status handling.
///
/// Status codes are checked by hand so a 404 becomes
/// [`FetchError::Status`] rather than a transport error.
pub fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

pub struct HttpImageFetcher {
    agent: Agent,
    /// Relative paths are resolved against this.
    base_dir: PathBuf,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            agent: create_agent(timeout),
            base_dir: base_dir.into(),
        }
    }

    fn is_remote(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }

    fn local_path(&self, url: &str) -> PathBuf {
        let path = Path::new(url.strip_prefix(FILE_SCHEME).unwrap_or(url));
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    fn fetch_remote(&self, url: &str, cancel: &CancelToken) -> Result<ImageData, FetchError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::Status(status));
        }
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        let bytes = response
            .into_body()
            .read_to_vec()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(ImageData::from_bytes(bytes))
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str, cancel: &CancelToken) -> Result<ImageData, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        if Self::is_remote(url) {
            return self.fetch_remote(url, cancel);
        }
        let path = self.local_path(url);
        debug!("reading image from {}", path.display());
        Ok(ImageData::from_bytes(std::fs::read(path)?))
    }
}
