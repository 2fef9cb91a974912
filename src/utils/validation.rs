//! Centralized validation and helper functions.

use std::path::Path;

/// Maximum number of subcontigs (excluded and included) in a single run.
/// Subcontig ordinals are stored as `u32` in the ownership table.
pub const MAX_SUBCONTIGS: usize = u32::MAX as usize;

/// Check if registering another subcontig would exceed the maximum allowed.
///
/// Call this with the current count BEFORE registering a new subcontig.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_subcontig_limit(count: usize) -> Option<String> {
    if count >= MAX_SUBCONTIGS {
        Some(format!(
            "Too many subcontigs: adding another would exceed maximum of {MAX_SUBCONTIGS}"
        ))
    } else {
        None
    }
}

/// Check if the path is a gzipped file
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Hidden files (leading `.`) are never treated as subcontig files
#[must_use]
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_subcontig_limit() {
        assert!(check_subcontig_limit(0).is_none());
        assert!(check_subcontig_limit(MAX_SUBCONTIGS - 1).is_none());
        assert!(check_subcontig_limit(MAX_SUBCONTIGS).is_some());
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("subcontig_1.subcontig.gz")));
        assert!(is_gzipped(Path::new("subcontig_1.fa.BGZ")));
        assert!(!is_gzipped(Path::new("subcontig_1.subcontig")));
        assert!(!is_gzipped(Path::new("gz")));
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(Path::new("/db/Subcontigs/.DS_Store")));
        assert!(!is_hidden(Path::new("/db/Subcontigs/subcontig_1.subcontig")));
    }
}
