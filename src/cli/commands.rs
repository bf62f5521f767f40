//! CLI commands and argument parsing

use crate::input::InputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginate a JSON array or the lines of a text file
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file, `-` for stdin
    #[arg(short, long, global = true, default_value = "-")]
    pub input: PathBuf,

    /// How the input is split into elements
    #[arg(long, global = true, default_value = "json")]
    pub input_format: InputFormat,

    /// Elements per page (overrides the config file)
    #[arg(short, long, global = true)]
    pub per_page: Option<usize>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page with its metadata
    Page {
        /// Page number (defaults to the configured first page)
        #[arg(allow_negative_numbers = true)]
        number: Option<i64>,
    },

    /// Print element count, page count and the list of pages
    Info,

    /// Print every page in order
    Walk,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
