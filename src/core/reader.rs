//! File reading as a result type
//!
//! A file either yields its full UTF-8 content or the reason it must be
//! skipped. The caller decides what to do with the failure; nothing here
//! panics or retries.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a file could not be read as text
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened or read
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

/// Read a file fully as UTF-8 text
///
/// The handle is scoped to this call: open, read fully, close, in strict
/// sequence. Invalid UTF-8 is an error, not a lossy conversion.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
