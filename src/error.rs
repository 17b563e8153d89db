//! Error types for the screenshot-organizer application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Identifier catalog errors
    #[error("Remote app catalog failed: {0}")]
    Catalog(String),

    #[error("Local app id cache {} is unusable: {message}", path.display())]
    Cache { path: PathBuf, message: String },

    // Per-file name resolution
    #[error("Filename does not follow the expected convention: {0}")]
    NoMatch(String),

    #[error("App id {0} is not in the catalog")]
    UnknownAppId(String),

    // File system errors
    #[error("Could not relocate {}: {message}", path.display())]
    Relocation { path: PathBuf, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("Remote app catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Whether this error only affects the current file.
    ///
    /// Skippable errors are recorded in the run report and the run moves on
    /// to the next file; every other error aborts the run.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Error::NoMatch(_) | Error::UnknownAppId(_))
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CATALOG_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const FILESYSTEM_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_FILES_SKIPPED: i32 = 6;
}
