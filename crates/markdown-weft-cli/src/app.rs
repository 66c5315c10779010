use std::{collections::HashMap, io, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use markdown_weft_config::Config;
use markdown_weft_engine::{Document, ImageEvent, ImageId, ImageLoader, LinkHandler};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::render::{ImageSlot, ImageStatus, LinkSpot, image_line, render};

pub struct App {
    title: String,
    lines: Vec<Line<'static>>,
    links: Vec<LinkSpot>,
    images: HashMap<ImageId, ImageSlot>,
    selected_link: Option<usize>,
    scroll: usize,
    /// Content height at the last draw, for paging.
    viewport: usize,
    wrap: bool,
    loader: Option<ImageLoader>,
    link_handler: Box<dyn LinkHandler>,
}

impl App {
    pub fn new(
        title: String,
        doc: &Document,
        config: &Config,
        loader: Option<ImageLoader>,
        link_handler: Box<dyn LinkHandler>,
    ) -> Self {
        let rendered = render(doc, config.viewer.show_link_targets);
        if let Some(loader) = &loader {
            let requested = loader.request_all(doc);
            debug!("requested {requested} image(s)");
        }

        Self {
            title,
            lines: rendered.lines,
            links: rendered.links,
            images: rendered.images,
            selected_link: None,
            scroll: 0,
            viewport: 1,
            wrap: config.viewer.wrap,
            loader,
            link_handler,
        }
    }

    /// Handles one key press. Returns true when the viewer should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => return true,
            (KeyCode::Tab, _) => self.next_link(),
            (KeyCode::BackTab, _) => self.previous_link(),
            (KeyCode::Enter, _) => self.activate_link(),
            (KeyCode::Down | KeyCode::Char('j'), _) => self.scroll_down(1),
            (KeyCode::Up | KeyCode::Char('k'), _) => self.scroll_up(1),
            (KeyCode::PageDown, _) => self.scroll_down(self.viewport),
            (KeyCode::PageUp, _) => self.scroll_up(self.viewport),
            (KeyCode::Char('g'), _) => self.scroll = 0,
            (KeyCode::Char('G'), _) => self.scroll = self.max_scroll(),
            _ => {}
        }
        false
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    fn scroll_down(&mut self, by: usize) {
        self.scroll = (self.scroll + by).min(self.max_scroll());
    }

    fn scroll_up(&mut self, by: usize) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn next_link(&mut self) {
        if self.links.is_empty() {
            return;
        }
        let i = match self.selected_link {
            Some(i) => (i + 1) % self.links.len(),
            None => 0,
        };
        self.select_link(i);
    }

    fn previous_link(&mut self) {
        if self.links.is_empty() {
            return;
        }
        let i = match self.selected_link {
            Some(0) | None => self.links.len() - 1,
            Some(i) => i - 1,
        };
        self.select_link(i);
    }

    fn select_link(&mut self, i: usize) {
        self.selected_link = Some(i);
        let line = self.links[i].line;
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + self.viewport {
            self.scroll = line + 1 - self.viewport;
        }
    }

    fn activate_link(&self) {
        if let Some(spot) = self.selected_link.and_then(|i| self.links.get(i)) {
            self.link_handler.on_link_activated(&spot.url);
        }
    }

    /// Rewrites an image's placeholder line with the fetch outcome.
    pub fn apply_image_event(&mut self, event: ImageEvent) {
        let Some(slot) = self.images.get(&event.id) else {
            return;
        };
        let status = match &event.result {
            Ok(data) => ImageStatus::Loaded(data),
            Err(err) => ImageStatus::Failed(err),
        };
        self.lines[slot.line] = image_line(slot, status);
    }

    /// Applies every image event that has arrived since the last call.
    pub fn poll_images(&mut self) {
        let mut events = Vec::new();
        if let Some(loader) = &self.loader {
            while let Some(event) = loader.try_next() {
                events.push(event);
            }
        }
        for event in events {
            self.apply_image_event(event);
        }
    }

    /// Lines with the selected link highlighted.
    fn styled_lines(&self) -> Vec<Line<'static>> {
        let mut lines = self.lines.clone();
        if let Some(spot) = self.selected_link.and_then(|i| self.links.get(i))
            && let Some(line) = lines.get_mut(spot.line)
        {
            for span in &mut line.spans[spot.spans.clone()] {
                span.style = span.style.add_modifier(Modifier::REVERSED);
            }
        }
        lines
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.clone());
        self.viewport = usize::from(block.inner(chunks[0]).height).max(1);

        let scroll = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        let mut content = Paragraph::new(self.styled_lines())
            .block(block)
            .scroll((scroll, 0));
        if self.wrap {
            content = content.wrap(Wrap { trim: false });
        }
        frame.render_widget(content, chunks[0]);

        let mut help = vec![Span::raw(
            "q: Quit | j/k: Scroll | PgUp/PgDn | g/G: Top/Bottom | Tab/Shift-Tab: Links",
        )];
        if let Some(spot) = self.selected_link.and_then(|i| self.links.get(i)) {
            help.push(Span::styled(
                format!(" | Enter: {}", spot.url),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(help)), chunks[1]);
    }
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.poll_images();
        terminal.draw(|frame| app.draw(frame))?;

        // Poll with a timeout so finished images show up without a key press
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key)
        {
            return Ok(());
        }
    }
}
