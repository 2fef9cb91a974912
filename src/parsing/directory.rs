//! Enumeration of subcontig directories.

use std::path::{Path, PathBuf};

use crate::parsing::ParseError;
use crate::utils::validation::is_hidden;

/// List the sequence files of a subcontig directory.
///
/// Sub-directories and hidden files are skipped. Files are returned sorted by
/// name so that ordinals, and therefore the report row order, do not depend on
/// the filesystem.
///
/// # Errors
///
/// Returns `ParseError::NotADirectory` if `dir` does not exist or is not a
/// directory, or `ParseError::Io` if it cannot be read.
pub fn list_sequence_files(dir: &Path) -> Result<Vec<PathBuf>, ParseError> {
    if !dir.is_dir() {
        return Err(ParseError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        // is_file() follows symlinks
        if !path.is_file() || is_hidden(&path) {
            continue;
        }
        files.push(path);
    }

    files.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
