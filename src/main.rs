//! threadreplay command-line entry point.

mod commands;

use std::io::IsTerminal;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use threadreplay::cli::{Cli, Commands, ConfigCommands};
use threadreplay::Config;

/// Log to stderr, filtered by RUST_LOG or the verbosity flag. Colour only
/// when stderr is a terminal.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Frames(args) => commands::frames::handle(&args, &Config::load()?),
        Commands::Tree(args) => commands::tree::handle(&args, &Config::load()?),
        Commands::Play(args) => commands::play::handle(&args, &Config::load()?),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "threadreplay", &mut std::io::stdout());
            Ok(())
        }
    }
}
