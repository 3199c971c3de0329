//! File system helpers shared by the registry and the command handlers.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Check if a file exists in a directory
pub fn has_file(dir: &Path, filename: &str) -> bool {
    dir.join(filename).is_file()
}

/// Names of the directories directly under `dir`, sorted.
///
/// Only one level is read. Plain files are skipped; symlinks are followed,
/// so a link to a directory counts as a directory.
pub fn list_dirs(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}
