//! Dump data model
//!
//! The aggregation pass produces an ordered sequence of records, one per
//! successfully read file, plus aggregate counters.

use serde::{Deserialize, Serialize};

/// One included file: its root-relative path and its text content
///
/// Paths always use '/' as separator, regardless of host convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Path relative to the aggregation root
    pub path: String,

    /// File content as read (trailing newlines are stripped at render time)
    pub content: String,
}

impl Record {
    /// Create a new record
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Aggregation statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpStats {
    /// Files that produced a record
    pub files_included: usize,

    /// Files skipped because they could not be read as text
    pub files_skipped: usize,

    /// Total content bytes across all records
    pub content_bytes: usize,
}
