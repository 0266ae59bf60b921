//! `scsubgen generate` command

use anyhow::Result;

use crate::cli::GenerateArgs;
use scsubgen::ops::{generate, render_descriptor};

use super::prepare;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let (root, config) = prepare(args.scan)?;

    if args.stdout {
        print!("{}", render_descriptor(&root, &config)?);
        return Ok(());
    }

    let path = generate(&root, &config)?;
    eprintln!("   Generated {}", path.display());

    Ok(())
}
