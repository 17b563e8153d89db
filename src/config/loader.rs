//! Configuration structures and loading logic.

use crate::config::modes::{NamingConvention, RelocationMode};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default endpoint for the full app list.
pub const DEFAULT_CATALOG_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v0002/";

/// File name of the app id cache inside the config directory.
const CACHE_FILE_NAME: &str = "app_ids.json";

/// File name of the configuration inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Screenshot directories to organize, processed in order.
    #[serde(default)]
    pub sources: Vec<SourceConfig>,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// A single screenshot source directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub convention: NamingConvention,
}

/// Organizer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root under which per-game folders are created.
    #[serde(default)]
    pub destination: Option<PathBuf>,

    /// Move or copy files into their game folder.
    #[serde(default)]
    pub mode: RelocationMode,

    /// JSON file of raw name -> folder name overrides.
    #[serde(default)]
    pub mapping_file: Option<PathBuf>,

    /// JSON cache of app id -> name. Defaults to the config directory.
    #[serde(default)]
    pub cache_file: Option<PathBuf>,

    /// File extensions to consider, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Report planned relocations without touching any file.
    #[serde(default)]
    pub dry_run: bool,

    /// Refresh the app id catalog before processing platform sources.
    #[serde(default)]
    pub refresh_catalog: bool,

    /// Whether to show a progress bar per source.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            destination: None,
            mode: RelocationMode::default(),
            mapping_file: None,
            cache_file: None,
            extensions: default_extensions(),
            dry_run: false,
            refresh_catalog: false,
            show_progress: true,
        }
    }
}

/// Remote app catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Endpoint returning the full app list.
    #[serde(default = "default_catalog_url")]
    pub url: String,

    /// Request timeout for the catalog download.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent sent with the catalog request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["png".to_string(), "jpg".to_string()]
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_true() -> bool {
    true
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Relative paths inside the file are resolved against the directory
    /// containing it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let mut config: Config = toml::from_str(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        for source in &mut self.sources {
            resolve(&mut source.path);
        }
        if let Some(p) = self.options.destination.as_mut() {
            resolve(p);
        }
        if let Some(p) = self.options.mapping_file.as_mut() {
            resolve(p);
        }
        if let Some(p) = self.options.cache_file.as_mut() {
            resolve(p);
        }
    }

    /// Get the effective app id cache location.
    ///
    /// The cache lives next to the configuration unless configured otherwise.
    pub fn cache_file(&self) -> PathBuf {
        self.options.cache_file.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.config_dir().join(CACHE_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(CACHE_FILE_NAME))
        })
    }

    /// Get the destination root, or an error if none was configured.
    pub fn destination(&self) -> Result<&Path> {
        self.options
            .destination
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("destination".to_string()))
    }

    /// Whether any source needs the app id catalog.
    pub fn has_platform_sources(&self) -> bool {
        self.sources
            .iter()
            .any(|s| s.convention == NamingConvention::Platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[options]
destination = "Games"
mapping_file = "names.json"
mode = "copy"

[[sources]]
path = "Captures"
convention = "capture"

[[sources]]
path = "/abs/Steam"
convention = "platform"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.options.destination, Some(dir.path().join("Games")));
        assert_eq!(
            config.options.mapping_file,
            Some(dir.path().join("names.json"))
        );
        assert_eq!(config.options.mode, RelocationMode::Copy);
        assert_eq!(config.sources[0].path, dir.path().join("Captures"));
        assert_eq!(config.sources[1].path, PathBuf::from("/abs/Steam"));
        assert!(config.has_platform_sources());
        assert_eq!(config.options.extensions, vec!["png", "jpg"]);
        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_destination_required() {
        let config = Config::default();
        assert!(matches!(
            config.destination(),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_explicit_cache_file() {
        let mut config = Config::default();
        config.options.cache_file = Some(PathBuf::from("/tmp/ids.json"));
        assert_eq!(config.cache_file(), PathBuf::from("/tmp/ids.json"));
    }
}
