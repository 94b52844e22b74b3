//! CLI module - Command-line interface definition and dispatch

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::dump::{self, DumpOptions};

/// dumpmd - concatenate a project's text files into project_dump.md.
#[derive(Parser, Debug)]
#[command(name = "dumpmd")]
#[command(
    author,
    version,
    about,
    long_about = r#"dumpmd walks the directory tree rooted at the working directory, skips
hidden files and directories (names starting with '.'), reads every remaining
file as UTF-8 text and writes all contents to a single project_dump.md, one
block per file:

    ## ./<relative/path>

    <file content, trailing newlines stripped>

Files that cannot be read as text are skipped with a diagnostic line; a
single bad file never aborts the run.

Examples:
    dumpmd
    dumpmd --root ../other-project
    dumpmd --stats
"#
)]
pub struct Cli {
    /// Root directory to aggregate.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory to aggregate (defaults to the current directory).\n\n\
All headers in the output document are relative to this root, and the\n\
output file project_dump.md is written into it."
    )]
    pub root: PathBuf,

    /// Print aggregation statistics to stderr.
    #[arg(
        long,
        long_help = "Print aggregation statistics (included files, skipped files, content\n\
bytes) to stderr after the run."
    )]
    pub stats: bool,

    /// Quiet mode (suppress progress lines on stdout).
    #[arg(
        short,
        long,
        long_help = "Suppress the per-file skip diagnostics and the completion line on\n\
stdout. The output file is still written."
    )]
    pub quiet: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let opts = DumpOptions {
        stats: cli.stats,
        quiet: cli.quiet,
    };

    dump::run_dump(&root, &opts)
}
