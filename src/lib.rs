//! Screenshot Organizer - sorts game screenshots into per-game folders.
//!
//! # Features
//!
//! - Game names from capture tool filenames (`<game> M_D_YYYY...`)
//! - Game names from platform filenames (`<app id>_...`), resolved against a
//!   cached copy of the public app catalog that refreshes on a miss
//! - Folder-safe name sanitization
//! - User rename/merge mapping
//! - Move, copy, or dry-run relocation
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use screenshot_organizer::{
//!     Config, IdentifierDirectory, NameMapping, Organizer, SteamCatalogClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let client = SteamCatalogClient::new(&config.catalog)?;
//!     let directory = IdentifierDirectory::new(client, config.cache_file());
//!     let mapping = NameMapping::load_optional(config.options.mapping_file.as_deref())?;
//!
//!     let report = Organizer::new(config, directory, mapping)?.run().await?;
//!     println!("moved {} file(s)", report.moved);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod naming;
pub mod organize;
pub mod output;

// Re-exports for convenience
pub use api::{CatalogSource, SteamCatalogClient};
pub use catalog::IdentifierDirectory;
pub use config::{Config, NamingConvention, RelocationMode};
pub use error::{Error, Result};
pub use naming::{extract_capture_name, resolve_platform_name, sanitize_name, NameMapping};
pub use organize::{Organizer, RunReport, SkipReason};
