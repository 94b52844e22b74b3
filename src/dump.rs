//! Aggregation flow - collect file contents and write project_dump.md
//!
//! Walks the tree once, reads every surviving file sequentially, and
//! writes the combined document in a single shot at the end.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::model::{DumpStats, Record};
use crate::core::paths::make_relative;
use crate::core::reader::{read_text, ReadError};
use crate::core::render::render_document;
use crate::scan::scan_files;

/// Fixed output file name, written into the root directory
pub const OUTPUT_FILE: &str = "project_dump.md";

/// Options for the dump flow
#[derive(Debug, Clone, Copy, Default)]
pub struct DumpOptions {
    /// Print statistics to stderr after the run
    pub stats: bool,

    /// Suppress stdout diagnostics
    pub quiet: bool,
}

/// A file that could not be read as text
#[derive(Debug)]
pub struct SkippedFile {
    /// Path relative to the aggregation root
    pub path: String,

    /// Why the read failed
    #[allow(dead_code)]
    pub reason: ReadError,
}

/// Everything a single aggregation pass produced, in traversal order
#[derive(Debug, Default)]
pub struct Dump {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedFile>,
}

impl Dump {
    /// Aggregate counters over the pass
    pub fn stats(&self) -> DumpStats {
        DumpStats {
            files_included: self.records.len(),
            files_skipped: self.skipped.len(),
            content_bytes: self.records.iter().map(|r| r.content.len()).sum(),
        }
    }
}

/// Walk the tree under root and read every non-hidden file
///
/// A per-file read failure is recorded and never aborts the pass; a
/// traversal error is fatal and propagates.
pub fn build_dump(root: &Path) -> Result<Dump> {
    let mut dump = Dump::default();

    for entry in scan_files(root) {
        let entry = entry?;
        let path = entry.path();

        let Some(relative) = make_relative(path, root) else {
            continue;
        };

        match read_text(path) {
            Ok(content) => dump.records.push(Record::new(relative, content)),
            Err(reason) => dump.skipped.push(SkippedFile {
                path: relative,
                reason,
            }),
        }
    }

    Ok(dump)
}

/// Run the dump flow
///
/// Renders the collected records and writes them to project_dump.md under
/// root, overwriting any existing file. An existing file is only replaced
/// once the write succeeds; a write failure is fatal.
pub fn run_dump(root: &Path, opts: &DumpOptions) -> Result<()> {
    let dump = build_dump(root)?;

    if !opts.quiet {
        for skipped in &dump.skipped {
            println!("skip (not read): {}", skipped.path);
        }
    }

    let document = render_document(&dump.records);
    fs::write(root.join(OUTPUT_FILE), document)?;

    if !opts.quiet {
        println!("{} <- done.", OUTPUT_FILE);
    }

    if opts.stats {
        let stats = dump.stats();
        eprintln!("Dump statistics:");
        eprintln!("   Included: {}", stats.files_included);
        eprintln!("   Skipped: {}", stats.files_skipped);
        eprintln!("   Content bytes: {}", stats.content_bytes);
    }

    Ok(())
}
