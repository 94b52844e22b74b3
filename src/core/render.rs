//! Renderer module
//!
//! Renders collected records into the fixed project_dump.md layout:
//! one block per record, all lines joined with a single '\n'.

use crate::core::model::Record;

/// Header line identifying one record
fn header_line(path: &str) -> String {
    format!("## ./{}", path)
}

/// Append one record's block to the line sequence
///
/// A block is the header line, a blank line, the content with trailing
/// newline characters stripped, then two blank lines (the second acts as
/// the separator before the next header).
fn push_block(lines: &mut Vec<String>, record: &Record) {
    lines.push(header_line(&record.path));
    lines.push(String::new());
    lines.push(record.content.trim_end_matches('\n').to_string());
    lines.push(String::new());
    lines.push(String::new());
}

/// Render all records into the output document
///
/// Records are rendered in the order given; an empty record list renders
/// to the empty string.
pub fn render_document(records: &[Record]) -> String {
    let mut lines = Vec::new();
    for record in records {
        push_block(&mut lines, record);
    }
    lines.join("\n")
}
