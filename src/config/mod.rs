//! Configuration module for the screenshot organizer.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Relocation modes and source naming conventions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{
    default_config_path, CatalogConfig, Config, OptionsConfig, SourceConfig, DEFAULT_CATALOG_URL,
};
pub use modes::{NamingConvention, RelocationMode};
pub use validation::{normalize_extension, validate_config};
