//! CLI module
//!
//! Command-line interface for paginating a collection.
//!
//! # Commands
//!
//! - `page` - Print one page with its metadata
//! - `info` - Print counts and the list of pages
//! - `walk` - Print every page in order

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
