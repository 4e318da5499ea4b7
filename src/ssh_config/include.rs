//! Include expansion helpers for SSH config parsing.

use super::path::expand_tilde;
use super::pattern::matches_pattern;
use std::path::{Path, PathBuf};

/// Resolve an `Include` pattern against the including file's directory.
pub(super) fn resolve_include_pattern(pattern: &str, base_dir: &Path) -> String {
    let expanded = expand_tilde(pattern);
    let expanded_path = PathBuf::from(&expanded);
    if expanded_path.is_absolute() {
        expanded
    } else {
        base_dir.join(expanded_path).to_string_lossy().to_string()
    }
}

/// Expand a resolved include pattern into the matching files, sorted by file
/// name so expansion order is stable.
pub(super) fn expand_include_pattern(pattern: &str) -> Vec<PathBuf> {
    let path = PathBuf::from(pattern);

    if !pattern.contains('*') && !pattern.contains('?') {
        if path.is_file() {
            return vec![path];
        }
        return Vec::new();
    }

    let parent = path.parent().unwrap_or(Path::new("."));
    let filename_pattern = path.file_name().and_then(|segment| segment.to_str()).unwrap_or("*");

    let mut matched_paths = Vec::new();
    if let Ok(entries) = std::fs::read_dir(parent) {
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }

            if let Ok(file_name) = entry.file_name().into_string()
                && matches_pattern(&file_name, filename_pattern)
            {
                matched_paths.push(entry.path());
            }
        }
    }

    matched_paths.sort_by(|left_path, right_path| left_path.file_name().cmp(&right_path.file_name()));
    matched_paths
}

#[cfg(test)]
#[path = "../test/ssh_config/include.rs"]
mod tests;
