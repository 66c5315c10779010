//! What happens when a link is activated.

use log::info;

pub trait LinkHandler {
    fn on_link_activated(&self, url: &str);
}

/// Default handler: records the activation and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLinkHandler;

impl LinkHandler for LogLinkHandler {
    fn on_link_activated(&self, url: &str) {
        info!("link activated: {url}");
    }
}

impl<F: Fn(&str)> LinkHandler for F {
    fn on_link_activated(&self, url: &str) {
        self(url)
    }
}
