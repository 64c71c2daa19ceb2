//! CLI commands and argument parsing

use crate::dto::TableOrder;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Continuation-token table paging CLI
#[derive(Parser, Debug)]
#[command(name = "table-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Table options file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub options: Option<PathBuf>,

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
    /// Visit pages in the given order
    Browse {
        /// Zero-based page indices to visit (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        pages: Vec<u64>,

        /// Include row data in the output
        #[arg(long)]
        rows: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Page forward until there are no more pages
    Walk {
        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the resolved table options
    Options,
}

/// Demo source and query settings shared by navigation commands
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Number of demo employee records
    #[arg(long, default_value = "150")]
    pub records: usize,

    /// Page size (defaults to the options' default page size)
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Global search term
    #[arg(long)]
    pub search: Option<String>,

    /// Treat the search term as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Ordering, e.g. `department:asc,salary:desc`
    #[arg(long, value_delimiter = ',')]
    pub order: Vec<TableOrder>,

    /// Report no totals, like a cursor-only backend
    #[arg(long)]
    pub hide_totals: bool,

    /// Simulated source latency in milliseconds
    #[arg(long, default_value = "0")]
    pub latency_ms: u64,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
