//! Top-level subcommands.

use clap::Subcommand;

use crate::config_commands::ConfigCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve storage (prompting on first run) and show every derived path
    Paths {
        /// Print the resolved context as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or change where deepdrive stores its files
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}
