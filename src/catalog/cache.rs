//! On-disk app id cache.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// App id -> canonical game name.
pub type IdTable = HashMap<String, String>;

/// Read the cache file, returning `None` when it does not exist yet.
pub fn read_cache(path: &Path) -> Result<Option<IdTable>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(cache_error(path, e)),
    };

    let table: IdTable = serde_json::from_str(&content).map_err(|e| cache_error(path, e))?;
    tracing::debug!("Loaded {} app ids from {}", table.len(), path.display());
    Ok(Some(table))
}

/// Replace the cache file with `table`.
///
/// The file is written to a sibling temp file first and renamed over the
/// old one, so an interrupted write never leaves a truncated cache.
pub fn write_cache(path: &Path, table: &IdTable) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| cache_error(path, e))?;
    }

    let sorted: BTreeMap<&String, &String> = table.iter().collect();
    let content = serde_json::to_string(&sorted).map_err(|e| cache_error(path, e))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).map_err(|e| cache_error(path, e))?;
    fs::rename(&tmp, path).map_err(|e| cache_error(path, e))?;

    tracing::debug!("Wrote {} app ids to {}", table.len(), path.display());
    Ok(())
}

fn cache_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Cache {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
