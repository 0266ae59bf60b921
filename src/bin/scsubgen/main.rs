//! scsubgen CLI - SCons build descriptor generator

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("scsubgen=debug")
    } else {
        EnvFilter::new("scsubgen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        None => commands::generate::execute(Default::default()),
        Some(Commands::Generate(args)) => commands::generate::execute(args),
        Some(Commands::List(args)) => commands::list::execute(args),
        Some(Commands::Dirs(args)) => commands::dirs::execute(args),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
    }
}
