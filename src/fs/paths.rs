//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Get the folder for a game under the destination root.
pub fn game_folder(destination: &Path, game: &str) -> PathBuf {
    destination.join(game)
}

/// Ensure a directory exists, creating it and its parents if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}
