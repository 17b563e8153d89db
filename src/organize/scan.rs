//! Source directory enumeration.

use std::path::{Path, PathBuf};

use crate::config::normalize_extension;
use crate::error::Result;

/// List the screenshot files directly inside `dir`, sorted by name.
///
/// Only regular files with an allowed extension are returned. Extensions
/// compare case-insensitively and may be configured with or without the
/// leading dot.
pub fn scan_source<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() {
            continue;
        }

        if has_allowed_extension(&path, extensions) {
            files.push(path);
        } else {
            tracing::debug!("Ignoring {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Check a path's extension against the allow-list.
pub fn has_allowed_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };

    extensions
        .iter()
        .any(|allowed| normalize_extension(allowed.as_ref()).eq_ignore_ascii_case(ext))
}
