//! `scsubgen list` command
//!
//! Hands the descriptor to an in-memory environment and prints what it
//! received, with every directory group resolved to concrete files.

use anyhow::Result;

use crate::cli::ListArgs;
use scsubgen::core::RecordingEnvironment;
use scsubgen::ops::build_descriptor;

use super::prepare;

pub fn execute(args: ListArgs) -> Result<()> {
    let (root, config) = prepare(args.scan)?;
    let descriptor = build_descriptor(&root, &config)?;

    let mut env = RecordingEnvironment::default();
    descriptor.apply(&mut env);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&env)?);
        return Ok(());
    }

    println!("search paths:");
    for path in &env.search_paths {
        println!("    {}", path);
    }

    for (target, files) in &env.targets {
        println!("{} ({} files):", target, files.len());
        for file in files {
            println!("    {}", file);
        }
    }

    Ok(())
}
