//! Link activation for the viewer.

use std::{
    io,
    process::{Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
};

use log::{info, warn};
use markdown_weft_config::LinkConfig;
use markdown_weft_engine::{LinkHandler, LogLinkHandler};

/// Opens activated links with an external program, e.g. `xdg-open`.
///
/// `open_command` may carry arguments; the URL is appended last.
#[derive(Debug, Clone)]
pub struct CommandLinkHandler {
    open_command: String,
}

impl CommandLinkHandler {
    pub fn new(open_command: impl Into<String>) -> Self {
        Self {
            open_command: open_command.into(),
        }
    }

    fn command_for(&self, url: &str) -> Option<Command> {
        let mut words = self.open_command.split_whitespace();
        let mut command = Command::new(words.next()?);
        command.args(words).arg(url);
        Some(command)
    }

    /// Starts the opener detached from the terminal and reaps it on a
    /// background thread once it exits.
    fn open(&self, url: &str) -> io::Result<Option<JoinHandle<io::Result<ExitStatus>>>> {
        let Some(mut command) = self.command_for(url) else {
            return Ok(None);
        };
        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(Some(thread::spawn(move || child.wait())))
    }
}

impl LinkHandler for CommandLinkHandler {
    fn on_link_activated(&self, url: &str) {
        match self.open(url) {
            Ok(Some(_)) => info!("opening {url} with {}", self.open_command),
            Ok(None) => warn!("open_command is empty, not opening {url}"),
            Err(e) => warn!("failed to run {}: {e}", self.open_command),
        }
    }
}

/// The handler the `[links]` section asks for.
pub fn link_handler(config: &LinkConfig) -> Box<dyn LinkHandler> {
    match &config.open_command {
        Some(cmd) => Box::new(CommandLinkHandler::new(cmd.clone())),
        None => Box::new(LogLinkHandler),
    }
}
