//! `scsubgen completions` command

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

/// Print a completion script for `args.shell`, registered under the binary name.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    tracing::debug!("Generating {} completions", args.shell);

    let mut stdout = io::stdout().lock();
    generate(
        args.shell,
        &mut Cli::command(),
        env!("CARGO_BIN_NAME"),
        &mut stdout,
    );
    stdout.flush()?;

    Ok(())
}
