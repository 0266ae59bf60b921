//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// scsubgen - SCons build descriptor generator for vendored C libraries
#[derive(Parser)]
#[command(name = "scsubgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `generate` in the current directory
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the SCsub descriptor into the source root
    Generate(GenerateArgs),

    /// Show the sources each directory contributes
    List(ListArgs),

    /// Show the scanned directories in scan order
    Dirs(DirsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that scans a tree.
#[derive(Args, Default)]
pub struct ScanArgs {
    /// Source root (defaults to current directory)
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to <root>/.scsubgen.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep filesystem listing order instead of sorting by name
    #[arg(long)]
    pub fs_order: bool,
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print the descriptor instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DirsArgs {
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
