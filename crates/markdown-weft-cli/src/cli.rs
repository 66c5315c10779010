//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Terminal viewer and converter for Markdown files
#[derive(Parser)]
#[command(name = "markdown-weft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a scrollable view of a file
    View {
        /// Markdown file to show
        file: PathBuf,
    },

    /// Render a file as an HTML fragment
    Html {
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the block structure of a file
    Outline { file: PathBuf },

    /// Dump the parsed document as JSON
    Json { file: PathBuf },
}
