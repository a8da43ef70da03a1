//! Recursive discovery of legacy-format images.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every file under `dir` whose name ends in one of `extensions`.
///
/// Matching is case-sensitive on the raw file name, so the both-case
/// extension set decides exactly which variants are picked up. The list
/// is materialized; order follows the walk and is not guaranteed.
/// Unreadable entries are skipped, and a missing root yields an empty
/// list.
pub fn find_images(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_legacy_extension(path, extensions))
        .collect()
}

/// Whether the file name ends in one of the legacy extensions.
fn has_legacy_extension(path: &Path, extensions: &[&str]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| extensions.iter().any(|ext| name.ends_with(ext)))
        .unwrap_or(false)
}
