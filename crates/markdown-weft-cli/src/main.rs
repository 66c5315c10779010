mod app;
mod cli;
mod fetch;
mod links;
mod render;

use std::{
    fs,
    io::stdout,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_weft_config::Config;
use markdown_weft_engine::{Document, ImageLoader, outline, parse_document, to_html};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{
    app::{App, run_app},
    cli::{Cli, Commands},
    fetch::HttpImageFetcher,
    links::link_handler,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::View { file } => view(&file, &config),
        Commands::Html { file, output } => {
            let html = to_html(&read_document(&file)?);
            match output {
                Some(path) => fs::write(&path, html)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{html}"),
            }
            Ok(())
        }
        Commands::Outline { file } => {
            print!("{}", outline(&read_document(&file)?));
            Ok(())
        }
        Commands::Json { file } => {
            let doc = read_document(&file)?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

fn read_document(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_document(&source)?)
}

/// Directory relative image paths resolve against when no `base_dir` is set.
fn document_dir(file: &Path) -> PathBuf {
    file.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn view(file: &Path, config: &Config) -> Result<()> {
    let doc = read_document(file)?;

    let loader = config.images.fetch.then(|| {
        let base_dir = config
            .images
            .base_dir
            .clone()
            .unwrap_or_else(|| document_dir(file));
        let timeout = Duration::from_secs(config.images.timeout_secs);
        ImageLoader::new(Arc::new(HttpImageFetcher::new(timeout, base_dir)))
    });
    let mut app = App::new(
        file.display().to_string(),
        &doc,
        config,
        loader,
        link_handler(&config.links),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
