//! Storage configuration subcommands.

use clap::Subcommand;

/// Storage root configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the config directory and the persisted storage root
    Show,
    /// Ask for a new storage root interactively and persist it
    Prompt,
    /// Set the storage root explicitly (non-interactive)
    Set {
        /// Directory where deepdrive should keep sims, weights, recordings and logs
        path: String,
        /// Fail if the directory does not exist (default creates it)
        #[arg(long)]
        no_create: bool,
    },
}
