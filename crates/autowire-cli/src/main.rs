//! Autowire CLI
//!
//! Resolves interface-typed component options to implementations and writes
//! the binding file plus configuration metadata.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Generate(args)) => commands::run_generate(&args),
        Some(Commands::Mappings(args)) => commands::run_mappings(&args),
        None => {
            println!(
                "{} Resolve component options to implementations",
                "autowire".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "autowire --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr. `RUST_LOG` selects the level, `info` by default;
/// `--verbose` forces `debug`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(verbose),
        )
        .try_init();
    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
}
