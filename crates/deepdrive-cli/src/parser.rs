//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the deepdrive storage bootstrap.
#[derive(Parser)]
#[command(name = "deepdrive")]
#[command(about = "Resolve and manage where deepdrive stores its files")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
