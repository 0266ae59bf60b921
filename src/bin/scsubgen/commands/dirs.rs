//! `scsubgen dirs` command

use anyhow::Result;

use crate::cli::DirsArgs;
use scsubgen::scan_directories;

use super::prepare;

pub fn execute(args: DirsArgs) -> Result<()> {
    let (root, config) = prepare(args.scan)?;

    for dir in scan_directories(&root, &config.scan_options())? {
        println!("{}", dir);
    }

    Ok(())
}
