//! table-pager CLI
//!
//! Command-line interface for scripting table navigation

use clap::Parser;
use table_pager::cli::{Cli, Runner};
use table_pager::config::TableOptions;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let debug = cli.verbose
        || cli
            .options
            .as_ref()
            .and_then(|path| TableOptions::from_file(path).ok())
            .is_some_and(|options| options.debug);
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize logging on stderr; stdout carries JSON messages
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
