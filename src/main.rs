//! dumpmd - aggregate a project's text files into one markdown snapshot
//!
//! dumpmd walks the working directory, skips hidden entries, reads every
//! remaining file as UTF-8 text and writes the concatenated result to
//! project_dump.md with one header per file.

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod dump;
mod scan;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
