//! User-maintained name overrides.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::naming::sanitize::sanitize_name;

/// Raw resolved name -> final folder name.
///
/// Lets several raw names collapse into one folder, or rename a game
/// entirely. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct NameMapping {
    table: HashMap<String, String>,
}

impl NameMapping {
    /// An empty mapping that leaves every name unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a flat JSON object of string keys to string values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::MissingConfig(format!("mapping file {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let table: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("Invalid mapping file {}: {}", path.display(), e))
        })?;

        tracing::debug!("Loaded {} name mappings from {}", table.len(), path.display());
        Ok(Self { table })
    }

    /// Load from `path` if one is configured, otherwise start empty.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::empty()),
        }
    }

    /// Look up `name`, returning it unchanged when it has no override.
    pub fn map<'a>(&'a self, name: &'a str) -> &'a str {
        self.table.get(name).map_or(name, String::as_str)
    }

    /// Sanitize, map, then sanitize again to get the final folder name.
    pub fn resolve(&self, raw: &str) -> String {
        let clean = sanitize_name(raw);
        sanitize_name(self.map(&clean))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl FromIterator<(String, String)> for NameMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}
