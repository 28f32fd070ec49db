//! CLI entry point - the composition root.
//!
//! Loads `.env`, installs logging, gathers bootstrap inputs and dispatches
//! to handlers.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use deepdrive_cli::utils::input::TerminalPrompter;
use deepdrive_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so prompts and `paths` output stay clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_process()?;
    let mut prompter = TerminalPrompter::stdio();

    match command {
        Commands::Paths { json } => {
            let ctx = bootstrap(&config, &mut prompter)?;
            handlers::paths::execute(&ctx, json, &mut std::io::stdout().lock())?;
        }
        Commands::Config { command } => {
            handlers::config::execute(&config, command, &mut prompter)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
