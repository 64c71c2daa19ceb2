//! CLI module
//!
//! Command-line interface for scripting table navigation over the demo
//! employee source.
//!
//! # Commands
//!
//! - `browse` - Visit pages in a given order
//! - `walk` - Page forward until the data runs out
//! - `options` - Print the resolved table options

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, SourceArgs};
pub use runner::Runner;
