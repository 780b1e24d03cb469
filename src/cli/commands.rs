//! CLI commands and argument parsing

use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infinite-scroll browser for paged JSON listings
#[derive(Parser, Debug)]
#[command(name = "feedscroll")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Feed configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Listing endpoint (overrides the config file)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Records per page (overrides the config file)
    #[arg(short = 'n', long, global = true)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t)]
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
    /// Scroll through the feed interactively (Enter/j down, k up, q quit)
    Browse {
        /// Rows shown at once
        #[arg(long, default_value = "20")]
        rows: usize,
    },

    /// Load a fixed number of pages and print every record
    Fetch {
        /// Number of pages to load
        #[arg(short, long, default_value = "1")]
        pages: u32,
    },

    /// Print the effective configuration as YAML
    Config,
}
