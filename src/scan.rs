//! File scanning backend
//!
//! Top-down traversal over walkdir, pruning hidden directories before
//! descent and yielding only non-hidden regular files.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::paths::is_hidden;

/// Walk predicate: keep an entry and, for directories, its subtree
///
/// The starting point itself (depth 0) is always kept, even when the root
/// path carries a dotted name; below it, every entry is judged by its own
/// leaf name. Returning false for a directory prunes everything beneath it.
fn keep_entry(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !is_hidden(Path::new(entry.file_name()))
}

/// Enumerate non-hidden files under root, top-down
///
/// Yields entries in implementation-defined directory order. Traversal
/// errors are passed through unchanged so the caller can propagate them.
pub fn scan_files(root: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(keep_entry)
        .filter(|entry| {
            entry
                .as_ref()
                .map(|e| e.file_type().is_file())
                .unwrap_or(true)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn scanned_names(root: &Path) -> Vec<String> {
        let mut names: Vec<String> = scan_files(root)
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp = tempdir().unwrap();
        assert!(scanned_names(temp.path()).is_empty());
    }

    #[test]
    fn test_scan_yields_only_files() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("file1.txt")).unwrap();
        File::create(temp.path().join("file2.rs")).unwrap();
        fs::create_dir(temp.path().join("subdir")).unwrap();

        assert_eq!(scanned_names(temp.path()), vec!["file1.txt", "file2.rs"]);
    }

    #[test]
    fn test_scan_skips_hidden_files() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join(".env")).unwrap();
        File::create(temp.path().join("keep.env")).unwrap();

        assert_eq!(scanned_names(temp.path()), vec!["keep.env"]);
    }

    #[test]
    fn test_scan_prunes_hidden_dirs() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        File::create(temp.path().join(".git/config")).unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        File::create(temp.path().join("src/main.rs")).unwrap();

        // config has a non-hidden name but sits under a pruned directory
        assert_eq!(scanned_names(temp.path()), vec!["main.rs"]);
    }

    #[test]
    fn test_scan_hidden_root_is_not_excluded() {
        let temp = tempdir().unwrap();
        let root = temp.path().join(".cache");
        fs::create_dir(&root).unwrap();
        File::create(root.join("data.txt")).unwrap();

        assert_eq!(scanned_names(&root), vec!["data.txt"]);
    }
}
