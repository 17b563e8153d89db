//! Moving and copying screenshots into their game folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::RelocationMode;
use crate::error::{Error, Result};

/// Put `file` into `folder`, keeping its file name.
///
/// Never overwrites. On failure the source is left where it was.
/// Returns the new path.
pub fn relocate(file: &Path, folder: &Path, mode: RelocationMode) -> Result<PathBuf> {
    let name = file.file_name().ok_or_else(|| Error::Relocation {
        path: file.to_path_buf(),
        message: "path has no file name".to_string(),
    })?;
    let target = folder.join(name);

    if target.exists() {
        return Err(Error::Relocation {
            path: file.to_path_buf(),
            message: format!("{} already exists", target.display()),
        });
    }

    let outcome = match mode {
        RelocationMode::Move => move_file(file, &target),
        RelocationMode::Copy => copy_file(file, &target),
    };

    outcome.map_err(|e| Error::Relocation {
        path: file.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(target)
}

fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!("Cross-device move of {}, copying", from.display());
            copy_file(from, to)?;
            // Keep a single copy at the source
            let removed = fs::remove_file(from);
            discard_on_error(to, removed)
        }
        other => other,
    }
}

/// Copy `from` to `to`, leaving no partial target behind on failure.
fn copy_file(from: &Path, to: &Path) -> io::Result<()> {
    let copied = fs::copy(from, to).map(|_| ());
    discard_on_error(to, copied)
}

/// Remove `target` if `result` is an error, then pass the result through.
fn discard_on_error(target: &Path, result: io::Result<()>) -> io::Result<()> {
    if result.is_err() && target.exists() {
        if let Err(cleanup) = fs::remove_file(target) {
            tracing::warn!(
                "Could not remove incomplete {}: {}",
                target.display(),
                cleanup
            );
        }
    }
    result
}
